//! Form state for the create/edit screens

pub mod asset_form;
pub mod field_list;
pub mod showroom_form;

pub use asset_form::{AssetForm, MIN_ASSET_FIELDS};
pub use field_list::{FieldList, FieldRow};
pub use showroom_form::ShowroomForm;
