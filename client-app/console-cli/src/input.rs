//! Turns command-line arguments into form state

use console_core::domain::{AssetField, AssetKind, MetaField, ShowroomKind, ShowroomSize};
use console_core::error::DomainError;
use console_core::forms::{AssetForm, FieldList, FieldRow, ShowroomForm};

use crate::cli::{AssetArgs, AssetPatchArgs, ShowroomArgs, ShowroomPatchArgs};

fn invalid(attribute: &str, value: &str) -> DomainError {
    DomainError::InvalidValue {
        attribute: attribute.to_string(),
        value: value.to_string(),
    }
}

/// Splits `name=value`, requiring a non-empty name.
fn split_pair<'a>(attribute: &str, spec: &'a str) -> Result<(&'a str, &'a str), DomainError> {
    match spec.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value)),
        _ => Err(invalid(attribute, spec)),
    }
}

/// Sets the attributes of the row at `target` in order, or of a freshly
/// appended row when there is no target.
fn set_row<T: FieldRow>(
    list: FieldList<T>,
    target: Option<usize>,
    attributes: &[(&str, &str)],
) -> Result<FieldList<T>, DomainError> {
    let (mut list, index) = match target {
        Some(index) => (list, index),
        None => {
            let list = list.append_blank();
            let index = list.len() - 1;
            (list, index)
        }
    };
    for (key, value) in attributes {
        list = list.update(index, key, value)?;
    }
    Ok(list)
}

/// Removes every row `matches` selects. A row the list may not lose is
/// blanked through `blank_attribute` instead, which drops it at submission.
fn drop_rows<T: FieldRow>(
    mut list: FieldList<T>,
    blank_attribute: &str,
    matches: impl Fn(&T) -> bool,
) -> Result<FieldList<T>, DomainError> {
    loop {
        let found = list.iter().position(&matches);
        let Some(index) = found else { break };
        list = if list.can_remove() {
            list.remove(index)
        } else {
            list.update(index, blank_attribute, "")?
        };
    }
    Ok(list)
}

/// `key=value` or `key:type=value`. A key already in the list is updated
/// in place; the single blank row of a fresh form is filled first.
pub fn asset_fields(
    base: FieldList<AssetField>,
    specs: &[String],
) -> Result<FieldList<AssetField>, DomainError> {
    let mut list = base;
    for spec in specs {
        let (name, value) = split_pair("field", spec)?;
        let (key, field_type) = match name.split_once(':') {
            Some((key, field_type)) => (key, Some(field_type)),
            None => (name, None),
        };

        let mut attributes = vec![("key", key)];
        if let Some(field_type) = field_type {
            attributes.push(("type", field_type));
        }
        attributes.push(("value", value));

        let target = list
            .iter()
            .position(|f| f.key.trim() == key)
            .or_else(|| list.iter().position(|f| f.is_blank()));
        list = set_row(list, target, &attributes)?;
    }
    Ok(list)
}

/// `label=WIDTHxHEIGHT` with an optional `:unit` suffix.
pub fn showroom_sizes(
    base: FieldList<ShowroomSize>,
    specs: &[String],
) -> Result<FieldList<ShowroomSize>, DomainError> {
    let mut list = base;
    for spec in specs {
        let (label, dims) = split_pair("size", spec)?;
        let (dims, unit) = match dims.split_once(':') {
            Some((dims, unit)) => (dims, Some(unit)),
            None => (dims, None),
        };
        let (width, height) = dims
            .split_once(|c| c == 'x' || c == 'X')
            .ok_or_else(|| invalid("size", spec))?;

        let mut attributes = vec![("label", label), ("width", width), ("height", height)];
        if let Some(unit) = unit {
            attributes.push(("unit", unit));
        }
        let target = list.iter().position(|s| s.label.trim() == label);
        list = set_row(list, target, &attributes)?;
    }
    Ok(list)
}

pub fn meta_fields(
    base: FieldList<MetaField>,
    specs: &[String],
) -> Result<FieldList<MetaField>, DomainError> {
    let mut list = base;
    for spec in specs {
        let (key, value) = split_pair("meta", spec)?;
        let target = list.iter().position(|m| m.key.trim() == key);
        list = set_row(list, target, &[("key", key), ("value", value)])?;
    }
    Ok(list)
}

pub fn asset_form(args: &AssetArgs, showroom_id: Option<&str>) -> Result<AssetForm, DomainError> {
    let mut form = match showroom_id {
        Some(id) => AssetForm::for_showroom(id),
        None => AssetForm::default(),
    };
    form.name = args.name.clone();
    form.description = args.description.clone().unwrap_or_default();
    form.kind = AssetKind::from_str(&args.kind).ok_or_else(|| invalid("kind", &args.kind))?;
    form.fields = asset_fields(form.fields, &args.fields)?;
    Ok(form)
}

pub fn showroom_form(args: &ShowroomArgs) -> Result<ShowroomForm, DomainError> {
    let mut form = ShowroomForm::new();
    form.name = args.name.clone();
    form.location = args.location.clone().unwrap_or_default();
    form.template = args.template.clone().unwrap_or_default();
    form.kind = ShowroomKind::from_str(&args.kind).ok_or_else(|| invalid("kind", &args.kind))?;
    form.sizes = showroom_sizes(form.sizes, &args.sizes)?;
    form.meta_fields = meta_fields(form.meta_fields, &args.meta)?;
    Ok(form)
}

/// Applies only the members given on the command line to a form seeded
/// from the stored asset.
pub fn patch_asset(mut form: AssetForm, changes: &AssetPatchArgs) -> Result<AssetForm, DomainError> {
    if let Some(name) = &changes.name {
        form.name = name.clone();
    }
    if let Some(description) = &changes.description {
        form.description = description.clone();
    }
    if let Some(kind) = &changes.kind {
        form.kind = AssetKind::from_str(kind).ok_or_else(|| invalid("kind", kind))?;
    }
    let mut fields = form.fields;
    for key in &changes.drop_fields {
        fields = drop_rows(fields, "key", |f| f.key.trim() == key.trim())?;
    }
    form.fields = asset_fields(fields, &changes.fields)?;
    Ok(form)
}

pub fn patch_showroom(
    mut form: ShowroomForm,
    changes: &ShowroomPatchArgs,
) -> Result<ShowroomForm, DomainError> {
    if let Some(name) = &changes.name {
        form.name = name.clone();
    }
    if let Some(location) = &changes.location {
        form.location = location.clone();
    }
    if let Some(template) = &changes.template {
        form.template = template.clone();
    }
    if let Some(kind) = &changes.kind {
        form.kind = ShowroomKind::from_str(kind).ok_or_else(|| invalid("kind", kind))?;
    }
    if let Some(active) = changes.active {
        form.is_active = active;
    }

    let mut sizes = form.sizes;
    for label in &changes.drop_sizes {
        sizes = drop_rows(sizes, "label", |s| s.label.trim() == label.trim())?;
    }
    form.sizes = showroom_sizes(sizes, &changes.sizes)?;

    let mut meta = form.meta_fields;
    for key in &changes.drop_meta {
        meta = drop_rows(meta, "key", |m| m.key.trim() == key.trim())?;
    }
    form.meta_fields = meta_fields(meta, &changes.meta)?;
    Ok(form)
}
