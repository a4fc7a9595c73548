//! Fixed-size float vectors used for vertex data and matrix columns.

use std::{
    mem,
    ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

macro_rules! impl_vector {
    ($({
        $Vec:ident, $dim:expr => $($field:ident),+
    }),+ $(,)?) => {
        $(
            #[doc = concat!("A ", stringify!($dim), "-dimensional vector.")]
            #[derive(Debug, Copy, Clone, PartialOrd, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
            #[repr(C)]
            #[must_use]
            pub struct $Vec {
                $(pub $field: f32),+
            }

            impl Default for $Vec {
                fn default() -> Self {
                    Self::origin()
                }
            }

            impl $Vec {
                #[doc = concat!("Create a ", stringify!($dim), "-dimensional vector from given coordinates.")]
                #[inline]
                pub fn new($($field: f32),+) -> Self {
                    Self { $($field),+ }
                }

                #[doc = concat!("Create a ", stringify!($dim), "-dimensional vector at the origin.")]
                #[inline]
                pub fn origin() -> Self {
                    Self { $($field: 0.0),+ }
                }

                /// Converts the vector into an array reference of `f32`.
                #[must_use]
                #[inline]
                pub fn as_array(&self) -> &[f32; $dim] {
                    let array: &[f32; $dim] = unsafe { mem::transmute(self) };
                    array
                }

                /// Converts the vector into a mutable array reference of `f32`.
                #[must_use]
                #[inline]
                pub fn as_array_mut(&mut self) -> &mut [f32; $dim] {
                    let array: &mut [f32; $dim] = unsafe { mem::transmute(self) };
                    array
                }

                /// Converts the vector into an array of `f32`.
                #[must_use]
                #[inline]
                pub fn to_array(self) -> [f32; $dim] {
                    let array: [f32; $dim] = unsafe { mem::transmute(self) };
                    array
                }

                /// Returns whether two vectors are equal given an epsilon.
                #[must_use]
                #[inline]
                pub fn compare(&self, rhs: Self, epsilon: f32) -> bool {
                    self.as_array()
                        .iter()
                        .zip(rhs.as_array().iter())
                        .all(|(a, b)| (a - b).abs() <= epsilon)
                }

                /// Calculate the squared magnitude of the vector.
                #[must_use]
                #[inline]
                pub fn magnitude_squared(&self) -> f32 {
                    self.as_array().iter().map(|val| val * val).sum()
                }

                /// Calculate the magnitude of the vector.
                #[must_use]
                #[inline]
                pub fn magnitude(&self) -> f32 {
                    self.magnitude_squared().sqrt()
                }
            }

            impl Index<usize> for $Vec {
                type Output = f32;

                fn index(&self, index: usize) -> &f32 {
                    self.as_array().index(index)
                }
            }

            impl IndexMut<usize> for $Vec {
                fn index_mut(&mut self, index: usize) -> &mut f32 {
                    self.as_array_mut().index_mut(index)
                }
            }

            impl From<[f32; $dim]> for $Vec {
                fn from(array: [f32; $dim]) -> Self {
                    let v: Self = unsafe { mem::transmute(array) };
                    v
                }
            }

            impl From<$Vec> for [f32; $dim] {
                fn from(vector: $Vec) -> Self {
                    vector.to_array()
                }
            }

            impl Add for $Vec {
                type Output = $Vec;

                fn add(self, rhs: Self) -> Self::Output {
                    $Vec::new($(self.$field + rhs.$field),+)
                }
            }

            impl AddAssign for $Vec {
                fn add_assign(&mut self, rhs: Self) {
                    $(self.$field += rhs.$field;)+
                }
            }

            impl Sub for $Vec {
                type Output = $Vec;

                fn sub(self, rhs: Self) -> Self::Output {
                    $Vec::new($(self.$field - rhs.$field),+)
                }
            }

            impl SubAssign for $Vec {
                fn sub_assign(&mut self, rhs: Self) {
                    $(self.$field -= rhs.$field;)+
                }
            }

            impl Mul<f32> for $Vec {
                type Output = $Vec;

                fn mul(self, rhs: f32) -> Self::Output {
                    $Vec::new($(self.$field * rhs),+)
                }
            }

            impl MulAssign<f32> for $Vec {
                fn mul_assign(&mut self, rhs: f32) {
                    $(self.$field *= rhs;)+
                }
            }

            impl Neg for $Vec {
                type Output = $Vec;

                fn neg(self) -> Self::Output {
                    $Vec::new($(-self.$field),+)
                }
            }
        )+
    };
}

impl_vector!(
    { Vec3, 3 => x, y, z },
    { Vec4, 4 => x, y, z, w },
);

/// Constructs a new [Vec3].
#[macro_export]
macro_rules! vec3 {
    () => {
        $crate::vector::Vec3::origin()
    };
    ($x:expr, $y:expr, $z:expr $(,)?) => {
        $crate::vector::Vec3::new($x, $y, $z)
    };
}

/// Constructs a new [Vec4].
#[macro_export]
macro_rules! vec4 {
    () => {
        $crate::vector::Vec4::origin()
    };
    ($x:expr, $y:expr, $z:expr, $w:expr $(,)?) => {
        $crate::vector::Vec4::new($x, $y, $z, $w)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = vec3!(1.0, 2.0, 3.0);
        let b = vec3!(4.0, 5.0, 6.0);
        assert_eq!(a + b, vec3!(5.0, 7.0, 9.0));
        assert_eq!(b - a, vec3!(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, vec3!(2.0, 4.0, 6.0));
        assert_eq!(-a, vec3!(-1.0, -2.0, -3.0));
    }

    #[test]
    fn array_round_trip() {
        let v = vec4!(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Vec4::from([1.0, 2.0, 3.0, 4.0]), v);
        assert_eq!(v[3], 4.0);
    }

    #[test]
    fn vertex_bytes_are_packed() {
        // Vertex uploads cast &[Vec3] to bytes, so layout must be tight.
        assert_eq!(std::mem::size_of::<Vec3>(), 3 * std::mem::size_of::<f32>());
        let vertices = [vec3!(0.0, 0.5, -2.0), vec3!(-0.5, -0.5, -2.0)];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec3!(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(vec4!().magnitude(), 0.0);
    }
}
