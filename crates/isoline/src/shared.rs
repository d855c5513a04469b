//! Shared 2-D buffers with range-checked per-worker write views.
//!
//! Every pipeline phase mutates a buffer that all workers can see, but
//! each worker only ever writes the rectangular region its partition
//! covers. [`RegionMut`] is the only write path into a [`SharedBuffer`]:
//! writes outside the view's region panic, so a mis-partitioned phase
//! fails loudly instead of corrupting a neighbor's cells.
//!
//! Synchronization contract (upheld by the pipeline, not by this module):
//! - regions of concurrently live views must be disjoint, which follows
//!   from deriving them from [`crate::partition::partition`] ranges;
//! - a cell written during phase N is only read after the phase N
//!   barrier, which provides the happens-before edge.

use std::cell::UnsafeCell;
use std::ops::Range;

/// A `height` x `width` buffer shared by all workers.
///
/// Reads are unsynchronized; writes go through [`SharedBuffer::region`].
pub struct SharedBuffer<T> {
    cells: Box<[UnsafeCell<T>]>,
    width: usize,
    height: usize,
}

// SAFETY: all cell access goes through raw pointers obtained from
// `UnsafeCell`, and the pipeline guarantees concurrent accesses never
// target the same cell (disjoint write regions, barrier-fenced reads).
unsafe impl<T: Send> Sync for SharedBuffer<T> {}

impl<T: Copy> SharedBuffer<T> {
    /// Wrap a row-major buffer. Panics unless `data.len() == width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), width * height);
        let cells = data.into_iter().map(UnsafeCell::new).collect();
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read the cell at (row, col).
    ///
    /// Valid only for cells whose writing phase has been fenced by a
    /// barrier (or that no worker is currently writing).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(row < self.height && col < self.width);
        // SAFETY: in-bounds cell; no concurrent writer per the module
        // synchronization contract.
        unsafe { *self.cells[row * self.width + col].get() }
    }

    /// Write view over the rectangle `rows` x `cols`.
    ///
    /// Panics when the region exceeds the buffer bounds. Empty ranges
    /// are valid and yield a view that accepts no writes.
    pub fn region(&self, rows: Range<usize>, cols: Range<usize>) -> RegionMut<'_, T> {
        assert!(rows.start <= rows.end && rows.end <= self.height);
        assert!(cols.start <= cols.end && cols.end <= self.width);
        RegionMut {
            buf: self,
            rows,
            cols,
        }
    }

    /// Consume the buffer, yielding its row-major contents.
    pub fn into_vec(self) -> Vec<T> {
        self.cells
            .into_vec()
            .into_iter()
            .map(UnsafeCell::into_inner)
            .collect()
    }
}

/// Mutable access to one rectangular region of a [`SharedBuffer`].
pub struct RegionMut<'a, T> {
    buf: &'a SharedBuffer<T>,
    rows: Range<usize>,
    cols: Range<usize>,
}

impl<'a, T: Copy> RegionMut<'a, T> {
    /// Row range this view may write.
    pub fn rows(&self) -> Range<usize> {
        self.rows.clone()
    }

    /// Column range this view may write.
    pub fn cols(&self) -> Range<usize> {
        self.cols.clone()
    }

    /// Write the cell at (row, col). Panics outside the view's region.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            self.rows.contains(&row) && self.cols.contains(&col),
            "write at ({row}, {col}) outside assigned region {:?} x {:?}",
            self.rows,
            self.cols
        );
        // SAFETY: in-bounds cell inside this view's region; regions of
        // concurrently live views are disjoint per the module contract.
        unsafe { *self.buf.cells[row * self.buf.width + col].get() = value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_write_and_read_back() {
        let buf = SharedBuffer::from_vec(4, 3, vec![0u8; 12]);
        let mut view = buf.region(1..3, 0..4);
        view.set(1, 0, 7);
        view.set(2, 3, 9);

        assert_eq!(buf.get(1, 0), 7);
        assert_eq!(buf.get(2, 3), 9);
        assert_eq!(buf.get(0, 0), 0);

        let out = buf.into_vec();
        assert_eq!(out[1 * 4], 7);
        assert_eq!(out[2 * 4 + 3], 9);
    }

    #[test]
    #[should_panic(expected = "outside assigned region")]
    fn test_region_rejects_write_outside_rows() {
        let buf = SharedBuffer::from_vec(4, 4, vec![0u8; 16]);
        let mut view = buf.region(0..2, 0..4);
        view.set(2, 0, 1);
    }

    #[test]
    #[should_panic(expected = "outside assigned region")]
    fn test_region_rejects_write_outside_cols() {
        let buf = SharedBuffer::from_vec(4, 4, vec![0u8; 16]);
        let mut view = buf.region(0..4, 1..3);
        view.set(0, 3, 1);
    }

    #[test]
    #[should_panic]
    fn test_region_must_fit_buffer() {
        let buf = SharedBuffer::from_vec(4, 4, vec![0u8; 16]);
        let _ = buf.region(0..5, 0..4);
    }

    #[test]
    fn test_empty_region_is_valid() {
        let buf = SharedBuffer::from_vec(4, 4, vec![0u8; 16]);
        let view = buf.region(2..2, 0..4);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_concurrent_disjoint_writes() {
        let buf = SharedBuffer::from_vec(8, 8, vec![0u32; 64]);
        std::thread::scope(|s| {
            for id in 0..4u32 {
                let buf = &buf;
                s.spawn(move || {
                    let rows = (id as usize * 2)..(id as usize * 2 + 2);
                    let mut view = buf.region(rows.clone(), 0..8);
                    for row in rows {
                        for col in 0..8 {
                            view.set(row, col, id + 1);
                        }
                    }
                });
            }
        });

        let out = buf.into_vec();
        for (idx, &v) in out.iter().enumerate() {
            assert_eq!(v, (idx / 16) as u32 + 1);
        }
    }
}
