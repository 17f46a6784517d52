//! Shared fixtures for the workspace test suites: canned regulatory page
//! text and an in-memory page extractor with scriptable failures.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use norma_core::errors::{IndexError, NormaResult};
use norma_core::traits::{IPageExtractor, PageText};

/// In-memory [`IPageExtractor`]. Paths registered with [`fail`] return an
/// unreadable-document error; unregistered paths yield no pages.
///
/// [`fail`]: FixtureExtractor::fail
#[derive(Default)]
pub struct FixtureExtractor {
    pages: HashMap<PathBuf, Vec<PageText>>,
    failures: HashMap<PathBuf, String>,
}

impl FixtureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, pages: Vec<PageText>) {
        self.pages.insert(path.into(), pages);
    }

    pub fn fail(&mut self, path: impl Into<PathBuf>, reason: impl Into<String>) {
        self.failures.insert(path.into(), reason.into());
    }
}

impl IPageExtractor for FixtureExtractor {
    fn extract_pages(&self, path: &Path) -> NormaResult<Vec<PageText>> {
        if let Some(reason) = self.failures.get(path) {
            return Err(IndexError::UnreadableDocument {
                source_id: path.display().to_string(),
                reason: reason.clone(),
            }
            .into());
        }
        Ok(self.pages.get(path).cloned().unwrap_or_default())
    }
}

pub fn page(n: u32, text: &str) -> PageText {
    PageText {
        page: n,
        text: text.to_string(),
    }
}

/// Pages of a project-regulation document (PFG).
pub fn pfg_pages() -> Vec<PageText> {
    vec![
        page(
            1,
            "Capítulo I Artículo 12 Los estudiantes deben matricular el proyecto final de \
             graduación una vez aprobados todos los cursos del plan de estudios y contar con \
             la autorización expresa de la dirección de carrera antes del inicio del periodo \
             lectivo correspondiente.",
        ),
        page(
            2,
            "Artículo 14 El docente de la materia PFG acompaña al estudiante durante todo el \
             proceso de elaboración del proyecto, revisa los avances entregados en cada fase \
             y emite la calificación final de acuerdo con la rúbrica aprobada por la comisión \
             correspondiente del programa.",
        ),
    ]
}

/// Pages of an academic-regulation document.
pub fn academico_pages() -> Vec<PageText> {
    vec![page(
        1,
        "Artículo 3 La matrícula ordinaria se realiza en las fechas definidas por el \
         calendario académico y requiere estar al día con las obligaciones financieras y \
         documentales establecidas por la universidad para cada periodo lectivo del año en \
         curso.",
    )]
}

/// Pages of a general-regulation document (faltas y sanciones).
pub fn general_pages() -> Vec<PageText> {
    vec![page(
        1,
        "Capítulo V Artículo 21 Las faltas graves contra el régimen disciplinario serán \
         sancionadas según su gravedad con amonestación escrita, suspensión temporal o \
         separación definitiva, previa audiencia ante el consejo respectivo y garantía del \
         debido proceso en todas las etapas.",
    )]
}

/// A page with no structural headers at all.
pub fn headerless_page() -> Vec<PageText> {
    vec![page(
        1,
        "glosario de términos empleados a lo largo del presente documento y abreviaturas de \
         uso frecuente en los reglamentos universitarios",
    )]
}
