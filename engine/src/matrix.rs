//! Column-major 4x4 matrix math.

use crate::{num::Radians, vec4, vector::Vec4};
use std::{
    mem,
    ops::{Index, IndexMut},
};

/// A 4x4 matrix of `f32` stored as four column vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
#[repr(C)]
#[must_use]
pub struct Mat4 {
    col0: Vec4,
    col1: Vec4,
    col2: Vec4,
    col3: Vec4,
}

impl Default for Mat4 {
    fn default() -> Self {
        Self {
            col0: vec4!(1.0, 0.0, 0.0, 0.0),
            col1: vec4!(0.0, 1.0, 0.0, 0.0),
            col2: vec4!(0.0, 0.0, 1.0, 0.0),
            col3: vec4!(0.0, 0.0, 0.0, 1.0),
        }
    }
}

impl Mat4 {
    /// Create a 4x4 matrix from given columns.
    #[inline]
    pub fn new(
        col0: impl Into<Vec4>,
        col1: impl Into<Vec4>,
        col2: impl Into<Vec4>,
        col3: impl Into<Vec4>,
    ) -> Self {
        Self {
            col0: col0.into(),
            col1: col1.into(),
            col2: col2.into(),
            col3: col3.into(),
        }
    }

    /// Construct an identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Construct a matrix with every entry set to zero.
    #[inline]
    pub fn zeroed() -> Self {
        Self::new(vec4!(), vec4!(), vec4!(), vec4!())
    }

    /// Create a perspective projection matrix.
    ///
    /// Maps right-handed view space to clip space. Inputs are not validated:
    /// a field of view at or beyond 180°, a zero aspect ratio, or
    /// `near_clip == far_clip` produce whatever IEEE-754 arithmetic yields
    /// (infinities or NaN) and propagate silently into rendering.
    #[inline]
    pub fn perspective(
        fov: impl Into<Radians>,
        aspect_ratio: f32,
        near_clip: f32,
        far_clip: f32,
    ) -> Self {
        let angle = fov.into().get();
        let f = 1.0 / (angle * 0.5).tan();
        let mut matrix = Self::zeroed();

        matrix[(0, 0)] = f / aspect_ratio;
        matrix[(1, 1)] = f;
        matrix[(2, 2)] = (far_clip + near_clip) / (near_clip - far_clip);
        matrix[(2, 3)] = -1.0;
        matrix[(3, 2)] = (2.0 * far_clip * near_clip) / (near_clip - far_clip);

        matrix
    }

    /// Return matrix entries as a single array reference in column-major
    /// order (index = column * 4 + row).
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> &[f32; 16] {
        let array: &[f32; 16] = unsafe { mem::transmute(self) };
        array
    }

    /// Return matrix entries as a single mutable array reference.
    #[inline]
    #[must_use]
    pub fn as_array_mut(&mut self) -> &mut [f32; 16] {
        let array: &mut [f32; 16] = unsafe { mem::transmute(self) };
        array
    }

    /// Convert the matrix into a column-major array.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [f32; 16] {
        let array: [f32; 16] = unsafe { mem::transmute(self) };
        array
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    fn index(&self, column: usize) -> &Self::Output {
        let columns: &[Vec4; 4] = unsafe { mem::transmute(self) };
        columns.index(column)
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, column: usize) -> &mut Self::Output {
        let columns: &mut [Vec4; 4] = unsafe { mem::transmute(self) };
        columns.index_mut(column)
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    fn index(&self, (column, row): (usize, usize)) -> &Self::Output {
        self.index(column).index(row)
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    fn index_mut(&mut self, (column, row): (usize, usize)) -> &mut Self::Output {
        self.index_mut(column).index_mut(row)
    }
}

impl From<[f32; 16]> for Mat4 {
    fn from(array: [f32; 16]) -> Self {
        let v: Self = unsafe { mem::transmute(array) };
        v
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(matrix: Mat4) -> Self {
        matrix.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::{ApproxEq, Degrees};

    const EPSILON: f32 = 1e-6;

    #[test]
    fn identity_diagonal() {
        let matrix = Mat4::identity();
        for column in 0..4 {
            for row in 0..4 {
                let expected = if column == row { 1.0 } else { 0.0 };
                assert_eq!(matrix[(column, row)], expected);
            }
        }
    }

    #[test]
    fn perspective_square_aspect() {
        // tan(45°) == 1, so a 90° fov with square aspect scales x and y equally.
        let matrix = Mat4::perspective(Degrees::from(90.0), 1.0, 1.0, 10.0);
        assert_eq!(matrix[(0, 0)], matrix[(1, 1)]);
        assert!(matrix[(0, 0)].is_approx_eq(1.0, EPSILON));
    }

    #[test]
    fn perspective_layout() {
        for (fov, aspect, near, far) in [
            (90.0, 4.0 / 3.0, 1.0, 10.0),
            (45.0, 16.0 / 9.0, 0.1, 100.0),
            (179.0, 0.5, 0.001, 2.0),
            (1.0, 3.0, 5.0, 6.0),
        ] {
            let matrix = Mat4::perspective(Degrees::from(fov), aspect, near, far);
            assert!(matrix[(2, 2)] < 0.0, "fov {fov}: depth scale must be negative");
            assert!(matrix[(3, 2)] < 0.0, "fov {fov}: depth offset must be negative");
            assert_eq!(matrix[(2, 3)], -1.0);

            let populated = [(0usize, 0usize), (1, 1), (2, 2), (2, 3), (3, 2)];
            for column in 0..4 {
                for row in 0..4 {
                    if !populated.contains(&(column, row)) {
                        assert_eq!(
                            matrix[(column, row)],
                            0.0,
                            "fov {fov}: entry ({column}, {row}) should stay zero"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn perspective_aspect_scaling() {
        let narrow = Mat4::perspective(Degrees::from(60.0), 1.0, 0.1, 100.0);
        let wide = Mat4::perspective(Degrees::from(60.0), 2.0, 0.1, 100.0);
        assert!(wide[(0, 0)].is_approx_eq(narrow[(0, 0)] / 2.0, EPSILON));
        assert_eq!(wide[(1, 1)], narrow[(1, 1)]);
    }

    #[test]
    fn perspective_is_pure() {
        let a = Mat4::perspective(Degrees::from(90.0), 4.0 / 3.0, 1.0, 10.0);
        let b = Mat4::perspective(Degrees::from(90.0), 4.0 / 3.0, 1.0, 10.0);
        let a_bits: Vec<u32> = a.to_array().iter().map(|entry| entry.to_bits()).collect();
        let b_bits: Vec<u32> = b.to_array().iter().map(|entry| entry.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn perspective_equal_clip_planes_are_unguarded() {
        // near == far divides by zero. The accepted behavior is to let the
        // non-finite values propagate rather than validate the inputs.
        let matrix = Mat4::perspective(Degrees::from(90.0), 1.0, 5.0, 5.0);
        assert!(!matrix[(2, 2)].is_finite());
        assert!(!matrix[(3, 2)].is_finite());
    }

    #[test]
    fn perspective_wide_fov_is_unguarded() {
        // At 180° the half-angle tangent blows up; beyond it the tangent goes
        // negative and flips the x/y scale. Neither case is validated.
        let at_limit = Mat4::perspective(Degrees::from(180.0), 1.0, 1.0, 10.0);
        assert!(at_limit[(1, 1)].abs() < 1e-6);

        let beyond = Mat4::perspective(Degrees::from(200.0), 1.0, 1.0, 10.0);
        assert!(beyond[(1, 1)] < 0.0);
    }

    #[test]
    fn column_major_array_order() {
        let matrix = Mat4::perspective(Degrees::from(90.0), 4.0 / 3.0, 1.0, 10.0);
        let array = matrix.to_array();
        // index = column * 4 + row
        assert_eq!(array[0], matrix[(0, 0)]);
        assert_eq!(array[5], matrix[(1, 1)]);
        assert_eq!(array[10], matrix[(2, 2)]);
        assert_eq!(array[11], matrix[(2, 3)]);
        assert_eq!(array[14], matrix[(3, 2)]);
        assert_eq!(array[15], 0.0);
        assert_eq!(Mat4::from(array), matrix);
    }
}
