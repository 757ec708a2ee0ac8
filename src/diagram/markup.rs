use svg::node::element::{
    Circle, Definitions, Element, Filter, Group, Line, Path, Pattern,
    Rectangle, Text,
};
use svg::{Document, Node};

use super::{
    InteractionDiagram, InteractionKind, InteractionNode, HEIGHT, WIDTH,
};

const GRID_STROKE: &str = "#f8fafc";
const SHADOW_FLOOD: &str = "#cbd5e1";

const GLYPH_FILL: &str = "#ecfdf5";
const GLYPH_STROKE: &str = "#047857";
const GLYPH_CORE: &str = "#10b981";
const GLYPH_LABEL: &str = "#065f46";
const GLYPH_SCALE: f64 = 2.0;

const HBOND_BOX_FILL: &str = "#fef9c3";
const HBOND_BOX_STROKE: &str = "#ca8a04";
const HBOND_LABEL: &str = "#854d0e";
const HBOND_LINE: &str = "#16a34a";
const HBOND_DISTANCE: &str = "#166534";
/// Fraction of the node-to-center vector covered by the dashed bond.
const HBOND_REACH: f64 = 0.4;

const HYDROPHOBIC_STROKE: &str = "#f97316";
const HYDROPHOBIC_LABEL: &str = "#9a3412";
const EYELASH: &str = "M -15 10 Q 0 25 15 10";

const FONT: &str = "Arial";

/// Fixed-precision number for attributes.
fn num(v: f64) -> String {
    format!("{v:.2}")
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({}, {})", num(x), num(y))
}

fn label(content: &str, y: f64, size: u32, color: &str) -> Text {
    Text::new(content)
        .set("x", 0)
        .set("y", num(y))
        .set("text-anchor", "middle")
        .set("font-family", FONT)
        .set("font-size", size)
        .set("fill", color)
}

fn definitions() -> Definitions {
    let grid = Pattern::new()
        .set("id", "grid")
        .set("width", 20)
        .set("height", 20)
        .set("patternUnits", "userSpaceOnUse")
        .add(
            Path::new()
                .set("d", "M 20 0 L 0 0 0 20")
                .set("fill", "none")
                .set("stroke", GRID_STROKE)
                .set("stroke-width", 1),
        );

    let mut drop_shadow = Element::new("feDropShadow");
    drop_shadow.assign("dx", 2);
    drop_shadow.assign("dy", 2);
    drop_shadow.assign("stdDeviation", 2);
    drop_shadow.assign("flood-color", SHADOW_FLOOD);
    let shadow = Filter::new()
        .set("id", "shadow")
        .set("x", "-20%")
        .set("y", "-20%")
        .set("width", "140%")
        .set("height", "140%")
        .add(drop_shadow);

    Definitions::new().add(grid).add(shadow)
}

fn glyph(diagram: &InteractionDiagram) -> Group {
    let center = InteractionDiagram::center();
    Group::new()
        .set(
            "transform",
            format!(
                "{} scale({GLYPH_SCALE:.1})",
                translate(center.x, center.y)
            ),
        )
        .set("filter", "url(#shadow)")
        .add(
            Path::new()
                .set("d", diagram.glyph().path())
                .set("fill", GLYPH_FILL)
                .set("stroke", GLYPH_STROKE)
                .set("stroke-width", 2),
        )
        .add(
            Circle::new()
                .set("cx", 0)
                .set("cy", 0)
                .set("r", 4)
                .set("fill", GLYPH_CORE),
        )
        .add(
            label(diagram.compound(), 45.0, 8, GLYPH_LABEL)
                .set("font-weight", "bold"),
        )
}

fn hydrogen_bond(node: &InteractionNode, to_center: glam::DVec2) -> Group {
    let reach = to_center * HBOND_REACH;
    let mid = to_center * (HBOND_REACH / 2.0);
    let mut group = Group::new()
        .set("transform", translate(node.position.x, node.position.y))
        .add(
            Rectangle::new()
                .set("x", -20)
                .set("y", -10)
                .set("width", 40)
                .set("height", 20)
                .set("rx", 4)
                .set("fill", HBOND_BOX_FILL)
                .set("stroke", HBOND_BOX_STROKE)
                .set("stroke-width", 2),
        )
        .add(
            label(&node.label(), 4.0, 10, HBOND_LABEL)
                .set("font-weight", "bold"),
        )
        .add(
            Line::new()
                .set("x1", 0)
                .set("y1", 0)
                .set("x2", num(reach.x))
                .set("y2", num(reach.y))
                .set("stroke", HBOND_LINE)
                .set("stroke-width", 2)
                .set("stroke-dasharray", "4,3"),
        );
    if let Some(distance) = node.distance {
        group = group.add(
            Text::new(format!("{distance:.1} Å"))
                .set("x", num(mid.x))
                .set("y", num(mid.y))
                .set("font-family", FONT)
                .set("font-size", 10)
                .set("fill", HBOND_DISTANCE)
                .set("font-style", "italic"),
        );
    }
    group
}

fn hydrophobic(node: &InteractionNode) -> Group {
    // The arc opens away from the glyph.
    let rotation = node.angle.to_degrees() + 90.0;
    Group::new()
        .set("transform", translate(node.position.x, node.position.y))
        .add(
            Path::new()
                .set("d", EYELASH)
                .set("fill", "none")
                .set("stroke", HYDROPHOBIC_STROKE)
                .set("stroke-width", 2)
                .set("stroke-linecap", "round")
                .set("transform", format!("rotate({})", num(rotation))),
        )
        .add(
            label(&node.label(), 0.0, 11, HYDROPHOBIC_LABEL)
                .set("font-weight", "bold"),
        )
        .add(label("Hydrophobic", 20.0, 9, HYDROPHOBIC_STROKE))
}

impl InteractionDiagram {
    /// The diagram as an SVG document.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let center = Self::center();
        let mut document = Document::new()
            .set("width", WIDTH)
            .set("height", HEIGHT)
            .set("viewBox", format!("0 0 {WIDTH} {HEIGHT}"))
            .set("style", format!("background: white; min-width: {WIDTH}px;"))
            .add(definitions())
            .add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", "url(#grid)"),
            )
            .add(glyph(self));

        for node in &self.nodes {
            let contact = match node.kind {
                InteractionKind::HydrogenBond => {
                    hydrogen_bond(node, center - node.position)
                }
                InteractionKind::Hydrophobic => hydrophobic(node),
            };
            document = document.add(contact);
        }
        document
    }

    /// Standalone SVG markup, fixed 800×400.
    #[must_use]
    pub fn to_markup(&self) -> String {
        self.to_document().to_string()
    }

    /// Markup for embedding in a report: the root element stretches to its
    /// container width and keeps the aspect ratio through `viewBox`.
    #[must_use]
    pub fn to_embedded_markup(&self) -> String {
        let markup = self.to_markup();
        let Some(end) = markup
            .find("<svg")
            .and_then(|start| markup[start..].find('>').map(|end| start + end))
        else {
            return markup;
        };
        let (root, rest) = markup.split_at(end);
        let root = root
            .replacen(&format!("width=\"{WIDTH}\""), "width=\"100%\"", 1)
            .replacen(&format!("height=\"{HEIGHT}\""), "height=\"auto\"", 1);
        format!("{root}{rest}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_byte_identical_per_seed() {
        let a = InteractionDiagram::generate("Ivacaftor (VX-770)").to_markup();
        let b = InteractionDiagram::generate("Ivacaftor (VX-770)").to_markup();
        assert_eq!(a, b);
        assert_ne!(a, InteractionDiagram::generate("Aspirin").to_markup());
    }

    #[test]
    fn markup_carries_contacts_and_glyph() {
        let diagram = InteractionDiagram::generate("Ivacaftor (VX-770)");
        let markup = diagram.to_markup();
        assert!(markup.contains("width=\"800\""));
        assert!(markup.contains("height=\"400\""));
        assert!(markup.contains("feDropShadow"));
        assert!(markup.contains("url(#grid)"));
        assert!(markup.contains(diagram.glyph().path()));
        for node in diagram.nodes() {
            assert!(markup.contains(&node.label()));
        }
        assert!(markup.contains("2.8 Å"));
        assert!(markup.contains("2.6 Å"));
        assert_eq!(markup.matches("Hydrophobic").count(), 2);
        assert!(markup.contains("Ivacaftor (VX-770)"));
    }

    #[test]
    fn embedded_markup_stretches_root_only() {
        let diagram = InteractionDiagram::generate("Aspirin");
        let root_end = |markup: &str| {
            let start = markup.find("<svg").unwrap();
            start + markup[start..].find('>').unwrap()
        };
        let embedded = diagram.to_embedded_markup();
        let standalone = diagram.to_markup();
        let root = &embedded[..root_end(&embedded)];
        assert!(root.contains("width=\"100%\""));
        assert!(root.contains("height=\"auto\""));
        assert!(!root.contains("width=\"800\""));
        assert!(root.contains("viewBox=\"0 0 800 400\""));
        assert_eq!(
            &embedded[root_end(&embedded)..],
            &standalone[root_end(&standalone)..]
        );
    }
}
