//! Drawable elements and their identifiers.
//!
//! Elements are opaque to the library panel: it never edits their geometry or
//! styling, it only duplicates them and rewrites identity and binding fields.
//! Properties the panel does not model are carried in [`Element::extra`] and
//! round-trip unchanged through serialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a single drawable element.
    ElementId
);

string_id!(
    /// Identifier shared by all elements of one group.
    GroupId
);

/// Kind of drawable primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Diamond,
    Ellipse,
    Arrow,
    Line,
    Freedraw,
    Text,
    Image,
    Frame,
    Embeddable,
    /// Any kind this build does not know about.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "rectangle"),
            Self::Diamond => write!(f, "diamond"),
            Self::Ellipse => write!(f, "ellipse"),
            Self::Arrow => write!(f, "arrow"),
            Self::Line => write!(f, "line"),
            Self::Freedraw => write!(f, "freedraw"),
            Self::Text => write!(f, "text"),
            Self::Image => write!(f, "image"),
            Self::Frame => write!(f, "frame"),
            Self::Embeddable => write!(f, "embeddable"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Back-reference from a container or shape to an element bound to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundElement {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
}

/// Attachment of a linear element endpoint to another element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Binding {
    pub element_id: ElementId,
    #[serde(default)]
    pub focus: f64,
    #[serde(default)]
    pub gap: f64,
}

fn default_version() -> u32 {
    1
}

/// A drawable primitive as stored in a library item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub angle: f64,
    /// Seed for the hand-drawn stroke randomization.
    #[serde(default)]
    pub seed: u32,
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub version_nonce: u32,
    #[serde(default)]
    pub group_ids: Vec<GroupId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<ElementId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<ElementId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bound_elements: Vec<BoundElement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_binding: Option<Binding>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_binding: Option<Binding>,
    /// Properties not interpreted by the panel (stroke, fill, text, points...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Element {
    /// Creates an element with zeroed geometry and no references.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            angle: 0.0,
            seed: 0,
            version: default_version(),
            version_nonce: 0,
            group_ids: Vec::new(),
            frame_id: None,
            container_id: None,
            bound_elements: Vec::new(),
            start_binding: None,
            end_binding: None,
            extra: Map::new(),
        }
    }

    pub fn with_bounds(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_group(mut self, group_id: impl Into<GroupId>) -> Self {
        self.group_ids.push(group_id.into());
        self
    }

    /// Returns every element id this element refers to.
    ///
    /// Covers bound elements, both arrow bindings, the text container and the
    /// enclosing frame.
    pub fn referenced_ids(&self) -> Vec<&ElementId> {
        let mut refs: Vec<&ElementId> = self.bound_elements.iter().map(|b| &b.id).collect();
        refs.extend(self.start_binding.as_ref().map(|b| &b.element_id));
        refs.extend(self.end_binding.as_ref().map(|b| &b.element_id));
        refs.extend(self.container_id.as_ref());
        refs.extend(self.frame_id.as_ref());
        refs
    }

    pub fn has_references(&self) -> bool {
        !self.referenced_ids().is_empty()
    }
}

/// Links `arrow` to `shape` in both directions, the way a canvas does when an
/// arrow endpoint is dropped onto a shape.
pub fn bind_arrow_start(arrow: &mut Element, shape: &mut Element) {
    arrow.start_binding = Some(Binding {
        element_id: shape.id.clone(),
        focus: 0.0,
        gap: 4.0,
    });
    shape.bound_elements.push(BoundElement {
        id: arrow.id.clone(),
        kind: arrow.kind,
    });
}

/// Same as [`bind_arrow_start`] for the arrow's end point.
pub fn bind_arrow_end(arrow: &mut Element, shape: &mut Element) {
    arrow.end_binding = Some(Binding {
        element_id: shape.id.clone(),
        focus: 0.0,
        gap: 4.0,
    });
    shape.bound_elements.push(BoundElement {
        id: arrow.id.clone(),
        kind: arrow.kind,
    });
}
