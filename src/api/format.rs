//! # Format
//!
//! formatting controls offered in the toolbar rendered above the editor

/// a toolbar formatting control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum Format {
	Font,
	Size,
	Color,
	Background,
	Bold,
	Italic,
	Underline,
	Strike,
	Align,
	Image,
	Link,
}

impl Format {
	/// toolbar used when none is configured
	pub const DEFAULTS: [Format; 9] = [
		Format::Font,
		Format::Size,
		Format::Color,
		Format::Background,
		Format::Bold,
		Format::Italic,
		Format::Underline,
		Format::Strike,
		Format::Link,
	];

	pub fn name(&self) -> &'static str {
		match self {
			Format::Font => "font",
			Format::Size => "size",
			Format::Color => "color",
			Format::Background => "background",
			Format::Bold => "bold",
			Format::Italic => "italic",
			Format::Underline => "underline",
			Format::Strike => "strike",
			Format::Align => "align",
			Format::Image => "image",
			Format::Link => "link",
		}
	}

	/// parse a list of format names, keeping their order
	///
	/// unknown names render nothing, so they are skipped with a warning
	pub fn parse_list<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Format> {
		names
			.into_iter()
			.filter_map(|name| match name.parse::<Format>() {
				Ok(format) => Some(format),
				Err(e) => {
					tracing::warn!("skipping toolbar format: {}", e);
					None
				},
			})
			.collect()
	}
}

impl std::fmt::Display for Format {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[derive(Debug, thiserror::Error)]
#[error("unknown format '{0}'")]
pub struct UnknownFormat(pub String);

impl std::str::FromStr for Format {
	type Err = UnknownFormat;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"font" => Ok(Format::Font),
			"size" => Ok(Format::Size),
			"color" => Ok(Format::Color),
			"background" => Ok(Format::Background),
			"bold" => Ok(Format::Bold),
			"italic" => Ok(Format::Italic),
			"underline" => Ok(Format::Underline),
			"strike" => Ok(Format::Strike),
			"align" => Ok(Format::Align),
			"image" => Ok(Format::Image),
			"link" => Ok(Format::Link),
			other => Err(UnknownFormat(other.to_string())),
		}
	}
}
