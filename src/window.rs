use log::trace;

use crate::capability::PerformanceSettings;
use crate::item::Item;

/// The minimal slice of a list to render, plus the layout offsets the
/// scrollable container needs to fake the full extent.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualWindow<'a> {
    pub visible_items: &'a [Item],
    /// Index of the first visible item in the full list.
    pub start_index: usize,
    /// Translation offset aligning the rendered slice with its scroll position.
    pub offset_y: u64,
    /// Full scroll extent of the list.
    pub total_height: u64,
}

impl<'a> VirtualWindow<'a> {
    fn empty() -> Self {
        Self {
            visible_items: &[],
            start_index: 0,
            offset_y: 0,
            total_height: 0,
        }
    }
}

/// Computes the visible slice for a fixed-row-height list.
///
/// Small lists (at most `max_visible_items`) pass through whole with no
/// windowing overhead, as does everything when virtualization is disabled in
/// the settings. `scroll_top` values past the end clamp to the last full
/// viewport. All heights are pixels.
///
/// `item_height == 0` is a caller contract violation; debug builds assert,
/// release builds return the empty window rather than divide by zero.
pub fn compute_window<'a>(
    items: &'a [Item],
    scroll_top: u64,
    item_height: u32,
    container_height: u32,
    settings: &PerformanceSettings,
) -> VirtualWindow<'a> {
    debug_assert!(item_height > 0, "item_height must be positive");
    if item_height == 0 || items.is_empty() {
        return VirtualWindow::empty();
    }

    let row = u64::from(item_height);
    let total_height = items.len() as u64 * row;

    if !settings.virtualization_enabled || items.len() <= settings.max_visible_items {
        return VirtualWindow {
            visible_items: items,
            start_index: 0,
            offset_y: 0,
            total_height,
        };
    }

    let max_top = total_height.saturating_sub(u64::from(container_height));
    let scroll_top = scroll_top.min(max_top);

    let start_index = (scroll_top / row) as usize;
    let visible_count =
        u64::from(container_height).div_ceil(row) as usize + settings.buffer_rows.max(1);
    let end_index = (start_index + visible_count).min(items.len());

    trace!(
        "window [{}, {}) of {} items at scroll_top {}",
        start_index,
        end_index,
        items.len(),
        scroll_top
    );

    VirtualWindow {
        visible_items: &items[start_index..end_index],
        start_index,
        offset_y: start_index as u64 * row,
        total_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<Item> {
        (0..n)
            .map(|i| Item {
                id: i.to_string(),
                name: format!("item {}", i),
                description: None,
                category_tags: Vec::new(),
                desire_score: 5,
                dibbed_by: None,
                is_private: false,
                collection_id: None,
            })
            .collect()
    }

    fn settings(max_visible: usize) -> PerformanceSettings {
        PerformanceSettings {
            max_visible_items: max_visible,
            buffer_rows: 2,
            ..PerformanceSettings::default()
        }
    }

    #[test]
    fn empty_list_yields_zero_extent() {
        let window = compute_window(&[], 500, 40, 600, &settings(20));
        assert_eq!(window.visible_items.len(), 0);
        assert_eq!(window.total_height, 0);
        assert_eq!(window.offset_y, 0);
    }

    #[test]
    fn windowed_slice_aligns_with_scroll_offset() {
        let list = items(200);
        let window = compute_window(&list, 400, 40, 600, &settings(20));

        assert_eq!(window.start_index, 10);
        assert_eq!(window.offset_y, 400);
        assert_eq!(window.total_height, 200 * 40);
        // ceil(600/40) + 2 buffer rows
        assert_eq!(window.visible_items.len(), 17);
        assert_eq!(window.visible_items[0].id, "10");
    }

    #[test]
    fn scroll_past_end_clamps() {
        let list = items(200);
        let window = compute_window(&list, u64::MAX, 40, 600, &settings(20));
        assert!(window.start_index < list.len());
        assert_eq!(
            window.visible_items.last().unwrap().id,
            (list.len() - 1).to_string()
        );
    }

    #[test]
    fn virtualization_disabled_passes_through() {
        let list = items(500);
        let mut s = settings(20);
        s.virtualization_enabled = false;
        let window = compute_window(&list, 10_000, 40, 600, &s);
        assert_eq!(window.visible_items.len(), 500);
        assert_eq!(window.offset_y, 0);
    }
}
