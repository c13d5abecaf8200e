//! Recipe dispatch
//!
//! Maps a record's recipe to exactly one template or chart routine, then
//! rasterises the resulting canvas:
//! Recipe → Template/Chart → SvgCanvas → PNG

use std::path::Path;

use tracing::{debug, info, span, trace, warn, Level};

use crate::charts;
use crate::core::{
    DiagramLayout, Rasterizer, RecordKey, RenderRecipe, RenderedImage, Result, SvgCanvas,
};
use crate::templates::composite::CompositeTemplate;
use crate::templates::fishbone::FishboneTemplate;
use crate::templates::flowchart::FlowchartTemplate;
use crate::templates::matrix::MatrixTemplate;
use crate::templates::table::TableTemplate;
use crate::templates::triangle::TriangleTemplate;
use crate::templates::venn::VennTemplate;
use crate::templates::Template;

/// Full title drawn above a diagram
pub fn diagram_title(key: &RecordKey, subtitle: &str) -> String {
    format!("Diagram for {}: {}", key, subtitle)
}

/// Select the template for `layout`, borrowing its literal inputs
pub fn template_for(layout: &DiagramLayout) -> Result<Box<dyn Template + '_>> {
    let template: Box<dyn Template + '_> = match layout {
        DiagramLayout::Table {
            header,
            rows,
            col_widths,
        } => Box::new(TableTemplate::new(header, rows, col_widths)),
        DiagramLayout::Matrix {
            x_label,
            y_label,
            quadrants,
            midpoint,
        } => Box::new(MatrixTemplate::new(
            x_label,
            y_label,
            quadrants,
            midpoint.as_deref(),
        )),
        DiagramLayout::Flowchart { steps } => Box::new(FlowchartTemplate::new(steps)),
        DiagramLayout::Fishbone { effect, categories } => {
            Box::new(FishboneTemplate::new(effect, categories))
        }
        DiagramLayout::Venn {
            sets,
            left_only,
            overlap,
            right_only,
        } => Box::new(VennTemplate::new(sets, left_only, overlap, right_only)),
        DiagramLayout::Triangle { vertices, center } => {
            Box::new(TriangleTemplate::new(vertices, center))
        }
        DiagramLayout::Composite { id } => Box::new(CompositeTemplate::new(id)?),
    };
    Ok(template)
}

/// Renders recipes to images with one shared rasterizer
pub struct Dispatcher {
    rasterizer: Rasterizer,
}

impl Dispatcher {
    pub fn new(rasterizer: Rasterizer) -> Self {
        Self { rasterizer }
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Run the vector stage only
    pub fn render_svg(&self, key: &RecordKey, recipe: &RenderRecipe) -> Result<SvgCanvas> {
        let svg_span = span!(Level::DEBUG, "render_svg", record = %key, kind = %recipe.kind());
        let _enter = svg_span.enter();

        let canvas = match recipe {
            RenderRecipe::Diagram(diagram) => {
                let template = template_for(&diagram.layout)?;
                trace!(template = template.name(), "Template selected");
                template.render(&diagram_title(key, &diagram.subtitle))?
            }
            RenderRecipe::Chart(chart) => charts::render(chart)?,
        };
        debug!(elements = canvas.element_count(), "Vector stage complete");
        Ok(canvas)
    }

    /// Render `recipe` and write a PNG to `path`
    pub fn render(
        &self,
        key: &RecordKey,
        recipe: &RenderRecipe,
        path: &Path,
    ) -> Result<RenderedImage> {
        let render_span = span!(Level::INFO, "render_record", record = %key);
        let _enter = render_span.enter();

        let canvas = self.render_svg(key, recipe).map_err(|e| {
            warn!(error = %e, "Vector stage failed");
            e
        })?;
        let image = self.rasterizer.write_png(&canvas.to_svg(), path)?;
        info!(
            path = %image.path.display(),
            width = image.width_px,
            height = image.height_px,
            "Record rendered"
        );
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ChartRecipe, DiagramRecipe, ReportError};

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(Rasterizer::without_fonts(50.0))
    }

    #[test]
    fn test_diagram_title() {
        let key = RecordKey::new("June 2023", 3);
        assert_eq!(
            diagram_title(&key, "International Assignment Training Timeline"),
            "Diagram for Q3 (June 2023): International Assignment Training Timeline"
        );
    }

    #[test]
    fn test_every_layout_has_a_template() {
        let layouts = vec![
            DiagramLayout::Table {
                header: vec!["a".into()],
                rows: vec![],
                col_widths: vec![1.0],
            },
            DiagramLayout::Flowchart { steps: vec![] },
            DiagramLayout::Composite {
                id: "hpws-to-hpo".into(),
            },
        ];
        for layout in &layouts {
            let template = template_for(layout).unwrap();
            assert_eq!(template.name(), layout.name());
        }
    }

    #[test]
    fn test_unknown_chart_kind_is_unsupported() {
        let recipe = RenderRecipe::Chart(ChartRecipe::new("pie3d", &[("A", 1)]));
        let err = dispatcher()
            .render_svg(&RecordKey::new("Section A", 1), &recipe)
            .unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedRecipe { .. }));
        assert!(err.is_record_scoped());
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q1.png");
        let recipe = RenderRecipe::Diagram(DiagramRecipe::new(
            "Relationship between HPWS and HPO",
            DiagramLayout::Composite {
                id: "hpws-to-hpo".into(),
            },
        ));
        let image = dispatcher()
            .render(&RecordKey::new("June 2023", 6), &recipe, &path)
            .unwrap();
        assert!(path.exists());
        // 10x5 inches at 50 dpi
        assert_eq!((image.width_px, image.height_px), (500, 250));
    }

    #[test]
    fn test_failed_render_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("q9.png");
        let recipe = RenderRecipe::Diagram(DiagramRecipe::new(
            "Unknown",
            DiagramLayout::Composite { id: "nope".into() },
        ));
        assert!(dispatcher()
            .render(&RecordKey::new("June 2023", 9), &recipe, &path)
            .is_err());
        assert!(!path.exists());
    }
}
