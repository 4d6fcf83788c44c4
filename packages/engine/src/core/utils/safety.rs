//! Zero-Cost Safety Macros
//!
//! Neighbor sums run over every interior cell each frame. The dead border
//! already guarantees every offset is inside the buffer, so release builds
//! skip the bounds check while debug builds keep it.
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use cellsound_engine::fast;
//!
//! // 3x3 lattice: center cell is the only interior cell
//! let cells = vec![false, true, false, true, false, true, false, false, true];
//! let above = *fast!(cells, [1]);
//! assert!(above);
//!
//! let mut next = vec![false; 9];
//! fast!(next, [4] = true);
//! assert!(next[4]);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release
///
/// Callers must guarantee the index is in range; debug builds panic if it is not.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
