// Copyright 2025 the Causeway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `libm` implementations of the float methods `core` does not provide.
//!
//! Only compiled without the `std` feature. Call sites keep the usual method syntax and import
//! [`FloatFuncs`] under the same condition; with `std` the inherent methods are used.

pub(crate) trait FloatFuncs: Sized {
    fn abs(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn ceil(self) -> Self;
    fn cos(self) -> Self;
    fn hypot(self, other: Self) -> Self;
    fn rem_euclid(self, rhs: Self) -> Self;
    fn sin(self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn sqrt(self) -> Self;
}

impl FloatFuncs for f64 {
    fn abs(self) -> Self {
        libm::fabs(self)
    }

    fn atan(self) -> Self {
        libm::atan(self)
    }

    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    fn cos(self) -> Self {
        libm::cos(self)
    }

    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }

    fn rem_euclid(self, rhs: Self) -> Self {
        let r = self % rhs;
        if r < 0.0 { r + libm::fabs(rhs) } else { r }
    }

    fn sin(self) -> Self {
        libm::sin(self)
    }

    fn sin_cos(self) -> (Self, Self) {
        libm::sincos(self)
    }

    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
}
