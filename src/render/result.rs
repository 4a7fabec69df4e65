//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered RTF
    pub content: String,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }
}

/// Statistics collected during a render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Paragraphs rendered, including synthesized cell paragraphs
    pub paragraph_count: u32,

    /// Tables rendered
    pub table_count: u32,

    /// Table rows rendered
    pub row_count: u32,

    /// Table cells rendered
    pub cell_count: u32,

    /// Empty paragraphs synthesized for cells without content
    pub synthesized_paragraph_count: u32,

    /// Pictures rendered
    pub picture_count: u32,

    /// Font or color names missing from the registries
    pub unresolved_reference_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    pub fn add_row(&mut self) {
        self.row_count += 1;
    }

    pub fn add_cell(&mut self) {
        self.cell_count += 1;
    }

    pub fn add_synthesized_paragraph(&mut self) {
        self.synthesized_paragraph_count += 1;
    }

    pub fn add_picture(&mut self) {
        self.picture_count += 1;
    }

    pub fn add_unresolved_reference(&mut self) {
        self.unresolved_reference_count += 1;
    }

    /// Check if every font and color reference resolved.
    pub fn all_references_resolved(&self) -> bool {
        self.unresolved_reference_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_counters() {
        let mut stats = RenderStats::new();
        stats.add_paragraph();
        stats.add_paragraph();
        stats.add_table();
        stats.add_synthesized_paragraph();
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.synthesized_paragraph_count, 1);
        assert!(stats.all_references_resolved());

        stats.add_unresolved_reference();
        assert!(!stats.all_references_resolved());
    }
}
