//! Single-selection click state.

use crate::scene::{Shape, ShapeId};

/// Which vertex, if any, is currently selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<V> {
    Idle,
    Selected { vertex: V, shape: ShapeId },
}

impl<V> Default for Selection<V> {
    fn default() -> Self {
        Selection::Idle
    }
}

impl<V> Selection<V> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    pub fn selected_vertex(&self) -> Option<&V> {
        match self {
            Selection::Idle => None,
            Selection::Selected { vertex, .. } => Some(vertex),
        }
    }

    pub fn selected_shape(&self) -> Option<ShapeId> {
        match self {
            Selection::Idle => None,
            Selection::Selected { shape, .. } => Some(*shape),
        }
    }

    /// Records a click on `shape` and reports what changed.
    ///
    /// Shapes are compared by id, never by value.
    pub(crate) fn click(&mut self, vertex: V, shape: ShapeId) -> Transition<V> {
        match std::mem::replace(self, Selection::Idle) {
            Selection::Selected {
                shape: current, ..
            } if current == shape => Transition::Deselect { vertex },
            Selection::Selected {
                vertex: previous,
                shape: previous_shape,
            } => {
                *self = Selection::Selected { vertex, shape };
                Transition::Select {
                    previous: Some((previous, previous_shape)),
                }
            }
            Selection::Idle => {
                *self = Selection::Selected { vertex, shape };
                Transition::Select { previous: None }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Transition<V> {
    /// A vertex became selected, replacing `previous` if there was one.
    Select { previous: Option<(V, ShapeId)> },
    /// The selected vertex was clicked again.
    Deselect { vertex: V },
}

pub type ShapeCallback<V> = Box<dyn FnMut(&V, &mut Shape)>;

/// Caller-defined click handling: `apply` runs on the newly selected vertex's shape, `reset` on
/// the shape being deselected.
pub struct CustomAction<V> {
    pub(crate) apply: ShapeCallback<V>,
    pub(crate) reset: ShapeCallback<V>,
}

impl<V> CustomAction<V> {
    pub fn new(
        apply: impl FnMut(&V, &mut Shape) + 'static,
        reset: impl FnMut(&V, &mut Shape) + 'static,
    ) -> Self {
        Self {
            apply: Box::new(apply),
            reset: Box::new(reset),
        }
    }
}

impl<V> std::fmt::Debug for CustomAction<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomAction").finish_non_exhaustive()
    }
}
