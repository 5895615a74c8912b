pub mod affine_point;
pub mod curve_params;
