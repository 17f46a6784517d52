//! Structural-kind stage: biases ranking toward article-level chunks,
//! since articles are the normative unit users usually want, while a
//! chapter header alone rarely answers a question.

use norma_core::config::RetrievalConfig;
use norma_core::models::{Chunk, StructuralKind, UNTITLED_LABEL};

use super::{QueryContext, ScoringStage};

pub struct StructureStage {
    article_boost: f32,
    chapter_boost: f32,
    plain_multiplier: f32,
    exempt_untitled: bool,
}

impl StructureStage {
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            article_boost: config.article_boost,
            chapter_boost: config.chapter_boost,
            plain_multiplier: config.plain_multiplier,
            exempt_untitled: config.exempt_untitled_from_structure,
        }
    }
}

impl ScoringStage for StructureStage {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn multiplier(&self, _query: &QueryContext, chunk: &Chunk) -> f32 {
        if self.exempt_untitled && chunk.label == UNTITLED_LABEL {
            return 1.0;
        }
        match chunk.kind {
            StructuralKind::Article => self.article_boost,
            StructuralKind::ChapterOrSection => self.chapter_boost,
            StructuralKind::Plain => self.plain_multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(label: &str) -> Chunk {
        Chunk {
            source_id: "reglamento.pdf".into(),
            page: Some(1),
            label: label.into(),
            kind: StructuralKind::from_label(label),
            raw_text: label.into(),
            normalized_text: label.to_lowercase(),
        }
    }

    fn query() -> QueryContext {
        QueryContext::new("pregunta cualquiera")
    }

    #[test]
    fn multipliers_follow_structural_kind() {
        let stage = StructureStage::from_config(&RetrievalConfig::default());
        assert!((stage.multiplier(&query(), &chunk("Artículo 12")) - 1.20).abs() < 1e-6);
        assert!((stage.multiplier(&query(), &chunk("Capítulo III")) - 1.05).abs() < 1e-6);
        assert!((stage.multiplier(&query(), &chunk(UNTITLED_LABEL)) - 0.85).abs() < 1e-6);
    }

    #[test]
    fn untitled_exemption_is_configurable() {
        let mut cfg = RetrievalConfig::default();
        cfg.exempt_untitled_from_structure = true;
        let stage = StructureStage::from_config(&cfg);
        assert!((stage.multiplier(&query(), &chunk(UNTITLED_LABEL)) - 1.0).abs() < 1e-6);
    }
}
