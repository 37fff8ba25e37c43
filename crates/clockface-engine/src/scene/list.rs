use crate::coords::Transform;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Transforms
///
/// Shape helpers record geometry mapped through the current transform. Use
/// [`with_transform`](Self::with_transform) to scope a transform to a block of
/// draw calls; the previous transform is restored when the closure returns, so
/// there is no inverse transform to remember.
///
/// ```ignore
/// draw_list.with_transform(Transform::rotation(angle), |dl| {
///     dl.push_line(z, Vec2::zero(), Vec2::new(0.0, -length), width, color, LineCap::Round);
/// });
/// ```
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Current transform applied by shape helpers.
    transform: Transform,
    /// Transforms saved by `push_transform`, innermost last.
    transform_stack: Vec<Transform>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and resets the transform state. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.transform = Transform::IDENTITY;
        self.transform_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// `cmd` is stored as-is; it is expected to already be in surface space.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    // ── transforms ────────────────────────────────────────────────────────

    /// The transform shape helpers currently apply.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Number of transforms saved by unmatched `push_transform` calls.
    #[inline]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Saves the current transform and composes `local` onto it.
    ///
    /// Calls must be balanced with [`pop_transform`](Self::pop_transform).
    #[inline]
    pub fn push_transform(&mut self, local: Transform) {
        self.transform_stack.push(self.transform);
        self.transform = self.transform.concat(local);
    }

    /// Restores the transform saved by the most recent `push_transform`.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        if let Some(prev) = self.transform_stack.pop() {
            self.transform = prev;
        }
    }

    /// Runs `f` with `local` composed onto the current transform.
    ///
    /// The transform state is restored to what it was before the call when `f`
    /// returns, including any pushes `f` left unbalanced.
    pub fn with_transform<R>(&mut self, local: Transform, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.transform_stack.len();
        self.push_transform(local);
        let out = f(self);
        debug_assert_eq!(
            self.transform_stack.len(),
            depth + 1,
            "unbalanced push_transform inside with_transform"
        );
        self.restore_transform_depth(depth);
        out
    }

    fn restore_transform_depth(&mut self, depth: usize) {
        if self.transform_stack.len() > depth {
            self.transform = self.transform_stack[depth];
            self.transform_stack.truncate(depth);
        }
    }

    // ── paint order ───────────────────────────────────────────────────────

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn dot(dl: &mut DrawList, z: i32, x: f32) {
        dl.push_solid_circle(ZIndex(z), Vec2::new(x, 0.0), 1.0, Color::white());
    }

    fn center_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Circle(c) => c.center.x,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut dl = DrawList::new();
        dot(&mut dl, 1, 0.0);
        dot(&mut dl, 0, 1.0);
        dot(&mut dl, 1, 2.0);
        dot(&mut dl, 0, 3.0);

        let xs: Vec<f32> = dl.iter_in_paint_order().map(center_x).collect();
        assert_eq!(xs, vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn with_transform_restores_previous_state() {
        let mut dl = DrawList::new();
        dl.with_transform(Transform::translation(Vec2::new(10.0, 0.0)), |dl| {
            assert_eq!(dl.transform_depth(), 1);
            dot(dl, 0, 1.0);
        });
        dot(&mut dl, 0, 1.0);

        assert_eq!(dl.transform_depth(), 0);
        assert_eq!(dl.transform(), Transform::IDENTITY);
        assert_eq!(center_x(&dl.items()[0]), 11.0);
        assert_eq!(center_x(&dl.items()[1]), 1.0);
    }

    #[test]
    fn nested_transforms_compose() {
        let mut dl = DrawList::new();
        let t = Transform::translation(Vec2::new(5.0, 0.0));
        dl.with_transform(t, |dl| {
            dl.with_transform(t, |dl| dot(dl, 0, 0.0));
            assert_eq!(dl.transform(), t);
        });
        assert_eq!(center_x(&dl.items()[0]), 10.0);
    }

    #[test]
    fn manual_push_pop_pairs() {
        let mut dl = DrawList::new();
        dl.push_transform(Transform::rotation(0.5));
        dl.push_transform(Transform::rotation(-0.5));
        assert_eq!(dl.transform_depth(), 2);
        dl.pop_transform();
        dl.pop_transform();
        assert_eq!(dl.transform_depth(), 0);
        assert_eq!(dl.transform(), Transform::IDENTITY);
    }

    #[test]
    fn clear_resets_items_and_transforms() {
        let mut dl = DrawList::new();
        dl.push_transform(Transform::translation(Vec2::new(3.0, 3.0)));
        dot(&mut dl, 0, 0.0);
        dl.clear();

        assert!(dl.is_empty());
        assert_eq!(dl.transform_depth(), 0);
        assert_eq!(dl.transform(), Transform::IDENTITY);
        assert!(dl.indices_in_paint_order().is_empty());
    }
}
