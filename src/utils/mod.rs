pub mod angles;
pub mod vector3d;
