pub mod vector;

pub use vector::{
    add_scaled, add_scaled_into, dot, max_abs, max_abs_below, negate_in_place, norm2,
    random_permutation, random_permutation_into, scale_in_place, sub, sub_into,
};
