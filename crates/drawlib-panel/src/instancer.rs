//! Produces fresh, collision-free copies of library item elements.
//!
//! Library items are duplicated before they are inserted onto a canvas or
//! exported in a drag payload. Every element gets a new id and every
//! reference between elements of the same item is rewritten to the new ids,
//! so two placements of one item never share identity and a binding edit in
//! one cannot leak into the other.

use drawlib_core::{Binding, Element, ElementId, GroupId, LibraryItem, PanelConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Duplicates elements with fresh identifiers and remapped bindings.
#[derive(Debug, Clone)]
pub struct ElementInstancer {
    rng: StdRng,
    randomize_seed: bool,
}

impl Default for ElementInstancer {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementInstancer {
    /// Creates an instancer seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            randomize_seed: true,
        }
    }

    /// Creates a deterministic instancer.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            randomize_seed: true,
        }
    }

    pub fn from_config(config: &PanelConfig) -> Self {
        Self::new().randomize_seed(config.randomize_seed)
    }

    /// Whether instanced elements receive a new stroke seed.
    pub fn randomize_seed(mut self, enabled: bool) -> Self {
        self.randomize_seed = enabled;
        self
    }

    /// Instances each item: same id, status and metadata, duplicated elements.
    pub fn instance(&mut self, items: &[&LibraryItem]) -> Vec<LibraryItem> {
        let instanced: Vec<LibraryItem> = items
            .iter()
            .map(|item| LibraryItem {
                id: item.id.clone(),
                status: item.status,
                name: item.name.clone(),
                created: item.created,
                elements: self.duplicate_elements(&item.elements),
            })
            .collect();

        tracing::debug!(
            items = instanced.len(),
            elements = instanced.iter().map(|i| i.elements.len()).sum::<usize>(),
            "instanced library items"
        );
        instanced
    }

    /// Duplicates one self-contained set of elements.
    ///
    /// References to elements outside `elements` cannot be resolved in the
    /// copy: bindings to them are dropped and container/frame links cleared.
    ///
    /// Every element gets its own id even when the source repeats one. A
    /// reference to a repeated source id resolves to its first occurrence.
    pub fn duplicate_elements(&mut self, elements: &[Element]) -> Vec<Element> {
        let new_ids: Vec<ElementId> = elements.iter().map(|_| self.next_id()).collect();
        let mut id_map: HashMap<&ElementId, ElementId> = HashMap::with_capacity(elements.len());
        for (source, new_id) in elements.iter().zip(&new_ids) {
            id_map.entry(&source.id).or_insert_with(|| new_id.clone());
        }
        if id_map.len() < elements.len() {
            tracing::warn!(
                elements = elements.len(),
                distinct = id_map.len(),
                "library item repeats element ids"
            );
        }
        let mut group_map: HashMap<&GroupId, GroupId> = HashMap::new();
        let mut dropped = 0usize;

        let duplicated = elements
            .iter()
            .zip(new_ids)
            .map(|(source, new_id)| {
                let mut el = source.clone();
                el.id = new_id;

                el.group_ids = source
                    .group_ids
                    .iter()
                    .map(|gid| {
                        group_map
                            .entry(gid)
                            .or_insert_with(|| GroupId::new(random_id(&mut self.rng)))
                            .clone()
                    })
                    .collect();

                el.bound_elements.retain_mut(|bound| match id_map.get(&bound.id) {
                    Some(new_id) => {
                        bound.id = new_id.clone();
                        true
                    }
                    None => {
                        dropped += 1;
                        false
                    }
                });

                el.start_binding =
                    remap_binding(source.start_binding.as_ref(), &id_map, &mut dropped);
                el.end_binding =
                    remap_binding(source.end_binding.as_ref(), &id_map, &mut dropped);
                el.container_id =
                    remap_id(source.container_id.as_ref(), &id_map, &mut dropped);
                el.frame_id = remap_id(source.frame_id.as_ref(), &id_map, &mut dropped);

                if self.randomize_seed {
                    el.seed = self.rng.gen();
                }
                el.version = 1;
                el.version_nonce = self.rng.gen();
                el
            })
            .collect();

        if dropped > 0 {
            tracing::debug!(dropped, "dropped references to elements outside the item");
        }
        duplicated
    }

    fn next_id(&mut self) -> ElementId {
        ElementId::new(random_id(&mut self.rng))
    }
}

fn random_id(rng: &mut StdRng) -> String {
    uuid::Builder::from_random_bytes(rng.gen())
        .into_uuid()
        .simple()
        .to_string()
}

fn remap_id(
    id: Option<&ElementId>,
    id_map: &HashMap<&ElementId, ElementId>,
    dropped: &mut usize,
) -> Option<ElementId> {
    let id = id?;
    let mapped = id_map.get(id).cloned();
    if mapped.is_none() {
        *dropped += 1;
    }
    mapped
}

fn remap_binding(
    binding: Option<&Binding>,
    id_map: &HashMap<&ElementId, ElementId>,
    dropped: &mut usize,
) -> Option<Binding> {
    let binding = binding?;
    let element_id = remap_id(Some(&binding.element_id), id_map, dropped)?;
    Some(Binding {
        element_id,
        ..binding.clone()
    })
}
