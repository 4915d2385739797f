use std::path::{Path as FsPath, PathBuf};

use svg::node::element::{path::Data, Circle, Group, Path, Text};
use svg::Document;
use unicode_width::UnicodeWidthStr;

use crate::{
    catalog::FaceView,
    error::{Error, Result},
    geom::{Translate, Vec2},
};

/// Stroke width of the housing outline, in inches.
pub const OUTLINE_WIDTH: f32 = 0.01;

/// Drawing parameters shared by every face.
///
/// The caption metrics only matter when captions are enabled; the defaults
/// leave the default output identical to an uncaptioned run.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FaceSpec {
    pub outline_width: f32,
    pub char_dims: Vec2,
    pub text_pads: Vec2,
    pub caption_pad: f32,
}

impl Default for FaceSpec {
    fn default() -> Self {
        Self {
            outline_width: OUTLINE_WIDTH,
            char_dims: Vec2::new(0.08, 0.13),
            text_pads: Vec2::new(0.03, 0.02),
            caption_pad: 0.04,
        }
    }
}

impl FaceSpec {
    fn caption_height(&self) -> f32 {
        self.char_dims.y + 2.0 * self.text_pads.y
    }

    fn bare_width(&self, text: &str) -> f32 {
        text.width_cjk() as f32 * self.char_dims.x
    }

    /// Draws one connector face as a complete SVG document.
    ///
    /// The canvas is sized in inches; the housing circle is centered, with
    /// every conductor placed relative to its center. Receptacle housings
    /// carry a black outline, plug housings do not.
    pub fn render(&self, face: &FaceView<'_>, captions: bool) -> Document {
        let width = face.diameter + 2.0 * self.outline_width;
        let caption_band = if captions {
            self.caption_height() + 2.0 * self.caption_pad
        } else {
            0.0
        };
        let height = width + caption_band;

        let mut housing = Circle::new()
            .set("r", face.diameter / 2.0)
            .set("fill", "white");
        if face.outlined {
            housing = housing
                .set("stroke", "black")
                .set("stroke-width", self.outline_width);
        }

        let mut group = Group::new()
            .set("transform", Translate(width / 2.0, width / 2.0))
            .add(housing);
        for (role, conductor) in &face.conductors {
            group = conductor.draw_on(group, role.color());
        }

        let mut document = Document::new()
            .set("width", format!("{width}in"))
            .set("height", format!("{height}in"))
            .set("viewBox", (0.0, 0.0, width, height))
            .add(group);

        if captions {
            let text = face.designation.to_string();
            let position = Translate(
                (width - self.bare_width(&text)) / 2.0,
                width + self.caption_pad,
            );
            document = document.add(self.draw_caption(&text).set("transform", position));
        }

        document
    }

    fn draw_caption(&self, text: &str) -> Group {
        let height = self.caption_height();
        let width = self.bare_width(text);

        let data = Data::new()
            .move_to((0.0, 0.0))
            .elliptical_arc_by((self.text_pads.x, self.text_pads.y, 0, 0, 0, 0.0, height))
            .line_by((width, 0.0))
            .elliptical_arc_by((self.text_pads.x, self.text_pads.y, 0, 0, 0, 0.0, -height))
            .close();

        let path = Path::new()
            .set("fill", "white")
            .set("stroke", "none")
            .set("d", data);

        let text_node = Text::new()
            .add(svg::node::Text::new(text))
            .set("fill", "black")
            .set("font-family", "monospace")
            .set("font-size", self.char_dims.y)
            .set("dominant-baseline", "middle")
            .set("text-anchor", "middle")
            .set("x", width / 2.0)
            .set("y", height / 2.0);

        Group::new().add(path).add(text_node)
    }

    /// Renders `face` and writes it to `dir` under its standard file name.
    pub fn save(&self, dir: &FsPath, face: &FaceView<'_>, captions: bool) -> Result<PathBuf> {
        let path = dir.join(face.designation.file_name());
        let document = self.render(face, captions);
        svg::save(&path, &document).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("wrote {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn receptacles_are_outlined_and_plugs_are_not() {
        let catalog = Catalog::wd6();
        let spec = FaceSpec::default();

        let receptacle = spec
            .render(&catalog.lookup("5-15R").unwrap(), false)
            .to_string();
        assert!(receptacle.contains(r#"stroke="black""#), "{receptacle}");

        let plug = spec.render(&catalog.lookup("5-15P").unwrap(), false).to_string();
        let housing = plug
            .lines()
            .find(|line| line.contains("<circle") && line.contains(r#"fill="white""#))
            .expect("housing circle");
        assert!(!housing.contains("stroke"), "{housing}");
    }

    #[test]
    fn canvas_is_sized_in_inches() {
        let catalog = Catalog::wd6();
        let document = FaceSpec::default()
            .render(&catalog.lookup("5-15P").unwrap(), false)
            .to_string();
        assert!(document.contains(r#"r="0.775""#), "{document}");
        assert!(document.contains("in\""), "{document}");
    }

    #[test]
    fn shapes_sit_directly_in_the_face_group() {
        let catalog = Catalog::wd6();
        let document = FaceSpec::default()
            .render(&catalog.lookup("5-15R").unwrap(), false)
            .to_string();
        assert_eq!(document.matches("<g").count(), 1, "{document}");
    }

    #[test]
    fn captions_add_a_label_band() {
        let catalog = Catalog::wd6();
        let spec = FaceSpec::default();
        let face = catalog.lookup("L5-30R").unwrap();

        let plain = spec.render(&face, false).to_string();
        assert!(!plain.contains("<text"), "{plain}");

        let captioned = spec.render(&face, true).to_string();
        assert!(captioned.contains("<text"), "{captioned}");
        assert!(captioned.contains("L5-30R"), "{captioned}");
        assert!(captioned.contains("monospace"), "{captioned}");
    }
}
