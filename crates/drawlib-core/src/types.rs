//! Type aliases for the callbacks the panel hands results to.

use crate::element::Element;
use crate::item::LibraryItem;

/// A callback that receives a single parameter.
pub type DataCallback<T> = Box<dyn Fn(T) + Send + Sync>;

/// Receives instanced library items to place onto the canvas.
pub type InsertCallback = DataCallback<Vec<LibraryItem>>;

/// Receives unsaved canvas elements the user wants added to the library.
pub type AddToLibraryCallback = DataCallback<Vec<Element>>;
