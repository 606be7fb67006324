use hashbrown::HashMap;
use petgraph::visit::EdgeRef;
use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use tracing::info;

use crate::{
    common::Stowage, error::Result, frequency::CountryFrequency, graph::CountryGraph,
    layout::Positions,
};

const GREY: RGBColor = RGBColor(128, 128, 128);
const LIGHT_GREY: RGBColor = RGBColor(211, 211, 211);

#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub size: (u32, u32),
    pub dpi: f64,
    pub margin: u32,
    pub alpha: f64,
    /// marker area in pt² for nodes absent from the frequency table
    pub fallback_size: f64,
    pub label_pt: f64,
    pub draw_labels: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            size: (640, 480),
            dpi: 100.0,
            margin: 40,
            alpha: 0.4,
            fallback_size: 300.0,
            label_pt: 7.0,
            draw_labels: true,
        }
    }
}

impl RenderStyle {
    fn pt_to_px(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }

    /// Marker area equals the country count in pt².
    pub fn node_radius(&self, count: Option<u64>) -> u32 {
        let area = count.map_or(self.fallback_size, |c| c as f64);
        self.pt_to_px(area.sqrt() / 2.0).round().max(1.0) as u32
    }

    pub fn to_pixel(&self, (x, y): (f64, f64)) -> (i32, i32) {
        let (w, h) = self.size;
        let span_x = w.saturating_sub(2 * self.margin) as f64;
        let span_y = h.saturating_sub(2 * self.margin) as f64;
        let px = self.margin as f64 + (x + 1.0) / 2.0 * span_x;
        let py = self.margin as f64 + (1.0 - y) / 2.0 * span_y;
        (px.round() as i32, py.round() as i32)
    }
}

pub fn render_network(
    stowage: &Stowage,
    graph: &CountryGraph,
    countries: &[CountryFrequency],
    pos: &Positions,
    style: &RenderStyle,
) -> Result<()> {
    let root = BitMapBackend::new(&stowage.network, style.size).into_drawing_area();
    root.fill(&WHITE)?;

    let pixels: Vec<(i32, i32)> = pos.iter().map(|p| style.to_pixel(*p)).collect();
    let sizes: HashMap<&str, u64> = countries
        .iter()
        .map(|r| (r.countries.as_str(), r.count))
        .collect();

    let edge_style = LIGHT_GREY.mix(style.alpha).stroke_width(1);
    for edge in graph.inner.edge_references() {
        let (a, b) = (pixels[edge.source().index()], pixels[edge.target().index()]);
        root.draw(&PathElement::new(vec![a, b], edge_style))?;
    }

    let node_style = GREY.mix(style.alpha).filled();
    for node in graph.inner.node_indices() {
        let r = style.node_radius(sizes.get(graph.name(node)).copied());
        root.draw(&Circle::new(pixels[node.index()], r, node_style))?;
    }

    if style.draw_labels {
        let font = ("sans-serif", style.pt_to_px(style.label_pt))
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        for node in graph.inner.node_indices() {
            root.draw(&Text::new(graph.name(node), pixels[node.index()], font.clone()))?;
        }
    }

    root.present()?;
    info!(path = %stowage.network.display(), nodes = graph.len(), "saved network");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::test_tools::scratch_dir, cooccurrence::CoOccurrence, layout::SpringLayout};

    #[test]
    fn radius_from_count() {
        let style = RenderStyle::default();
        assert_eq!(style.node_radius(Some(144)), 8);
        assert_eq!(style.node_radius(None), style.node_radius(Some(300)));
        assert_eq!(style.node_radius(Some(0)), 1);
    }

    #[test]
    fn pixel_mapping() {
        let style = RenderStyle::default();
        assert_eq!(style.to_pixel((-1.0, 1.0)), (40, 40));
        assert_eq!(style.to_pixel((1.0, -1.0)), (600, 440));
        assert_eq!(style.to_pixel((0.0, 0.0)), (320, 240));
    }

    fn draw_sample(name: &str, draw_labels: bool) -> Vec<u8> {
        let dir = scratch_dir(name);
        let stowage = Stowage::new(&dir).unwrap();
        let graph = CountryGraph::from_co_occurrences(&[
            CoOccurrence::new("USA", "France", 3),
            CoOccurrence::new("Spain", "France", 1),
        ]);
        let countries = vec![
            CountryFrequency::new("USA", 30),
            CountryFrequency::new("France", 12),
        ];
        let pos = SpringLayout {
            seed: Some(1),
            ..SpringLayout::default()
        }
        .positions(&graph);
        let style = RenderStyle {
            draw_labels,
            ..RenderStyle::default()
        };
        render_network(&stowage, &graph, &countries, &pos, &style).unwrap();
        let bytes = std::fs::read(&stowage.network).unwrap();
        std::fs::remove_dir_all(dir).unwrap();
        bytes
    }

    #[test]
    fn writes_png() {
        let bytes = draw_sample("render", false);
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn writes_labelled_png() {
        let plain = draw_sample("render-plain", false);
        let labelled = draw_sample("render-labels", true);
        assert_eq!(&labelled[1..4], b"PNG");
        assert_ne!(plain, labelled);
    }
}
