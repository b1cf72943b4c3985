//! Ordered list-of-rows editor backing the repeatable form sections
//! (asset fields, showroom sizes, meta fields).
//!
//! Every operation returns a new list. Rows that an operation does not
//! touch are shared with the previous list through `Arc`, so callers can
//! detect which rows changed by pointer comparison.

use std::sync::Arc;

use crate::domain::{AssetField, FieldType, MetaField, ShowroomSize};
use crate::error::DomainError;

/// A row that can be edited one attribute at a time.
pub trait FieldRow: Clone {
    /// Fresh row appended by the "add" button.
    fn blank() -> Self;

    /// Copy of `self` with attribute `key` set from its textual form.
    fn with_attribute(&self, key: &str, value: &str) -> Result<Self, DomainError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldList<T> {
    rows: Vec<Arc<T>>,
    min_len: usize,
}

impl<T: FieldRow> FieldList<T> {
    /// List that may become empty.
    pub fn new(rows: Vec<T>) -> Self {
        Self::with_min_len(rows, 0)
    }

    /// List that never shrinks below `min_len` rows. Missing rows are
    /// filled with blanks up front.
    pub fn with_min_len(rows: Vec<T>, min_len: usize) -> Self {
        let mut rows: Vec<Arc<T>> = rows.into_iter().map(Arc::new).collect();
        while rows.len() < min_len {
            rows.push(Arc::new(T::blank()));
        }
        Self { rows, min_len }
    }

    #[must_use]
    pub fn append(&self, template: T) -> Self {
        let mut rows = self.rows.clone();
        rows.push(Arc::new(template));
        Self { rows, min_len: self.min_len }
    }

    #[must_use]
    pub fn append_blank(&self) -> Self {
        self.append(T::blank())
    }

    /// Removes the row at `index`. Out-of-range indices and removals that
    /// would go below the minimum length leave the list unchanged.
    #[must_use]
    pub fn remove(&self, index: usize) -> Self {
        if index >= self.rows.len() || self.rows.len() <= self.min_len {
            return self.clone();
        }
        let mut rows = self.rows.clone();
        rows.remove(index);
        Self { rows, min_len: self.min_len }
    }

    /// Replaces attribute `key` of the row at `index`. An out-of-range
    /// index leaves the list unchanged.
    pub fn update(&self, index: usize, key: &str, value: &str) -> Result<Self, DomainError> {
        let Some(row) = self.rows.get(index) else {
            return Ok(self.clone());
        };
        let updated = row.with_attribute(key, value)?;
        let mut rows = self.rows.clone();
        rows[index] = Arc::new(updated);
        Ok(Self { rows, min_len: self.min_len })
    }

    pub fn rows(&self) -> &[Arc<T>] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index).map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn can_remove(&self) -> bool {
        self.rows.len() > self.min_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|r| r.as_ref())
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: FieldRow> Default for FieldList<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn parse_bool(attribute: &str, value: &str) -> Result<bool, DomainError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" | "" => Ok(false),
        _ => Err(invalid(attribute, value)),
    }
}

fn parse_number(attribute: &str, value: &str) -> Result<f64, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .ok_or_else(|| invalid(attribute, value))
}

fn invalid(attribute: &str, value: &str) -> DomainError {
    DomainError::InvalidValue {
        attribute: attribute.to_string(),
        value: value.to_string(),
    }
}

impl FieldRow for AssetField {
    fn blank() -> Self {
        AssetField::default()
    }

    fn with_attribute(&self, key: &str, value: &str) -> Result<Self, DomainError> {
        let mut row = self.clone();
        match key {
            "key" => row.key = value.to_string(),
            "type" => {
                row.field_type = FieldType::from_str(value).ok_or_else(|| invalid(key, value))?;
                if row.field_type == FieldType::Password {
                    row.secret = true;
                }
            }
            "value" => row.value = value.to_string(),
            "secret" => row.secret = parse_bool(key, value)?,
            other => return Err(DomainError::UnknownAttribute(other.to_string())),
        }
        Ok(row)
    }
}

impl FieldRow for ShowroomSize {
    fn blank() -> Self {
        ShowroomSize {
            unit: "m".to_string(),
            ..Default::default()
        }
    }

    fn with_attribute(&self, key: &str, value: &str) -> Result<Self, DomainError> {
        let mut row = self.clone();
        match key {
            "label" => row.label = value.to_string(),
            "width" => row.width = parse_number(key, value)?,
            "height" => row.height = parse_number(key, value)?,
            "unit" => row.unit = value.trim().to_string(),
            other => return Err(DomainError::UnknownAttribute(other.to_string())),
        }
        Ok(row)
    }
}

impl FieldRow for MetaField {
    fn blank() -> Self {
        MetaField::default()
    }

    fn with_attribute(&self, key: &str, value: &str) -> Result<Self, DomainError> {
        let mut row = self.clone();
        match key {
            "key" => row.key = value.to_string(),
            "value" => row.value = value.to_string(),
            other => return Err(DomainError::UnknownAttribute(other.to_string())),
        }
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> FieldList<AssetField> {
        FieldList::with_min_len(
            vec![
                AssetField::new("username", FieldType::Text, "admin", false),
                AssetField::new("password", FieldType::Password, "hunter2", true),
            ],
            1,
        )
    }

    #[test]
    fn test_remove_on_single_entry_is_noop() {
        let list = FieldList::<AssetField>::with_min_len(vec![], 1);
        assert_eq!(list.len(), 1);
        let after = list.remove(0);
        assert_eq!(after.len(), 1);
        assert!(Arc::ptr_eq(&after.rows()[0], &list.rows()[0]));
    }

    #[test]
    fn test_append_then_remove_restores_rows() {
        let list = fields();
        let grown = list.append_blank();
        assert_eq!(grown.len(), 3);
        let restored = grown.remove(grown.len() - 1);
        assert_eq!(restored.len(), list.len());
        for (a, b) in restored.rows().iter().zip(list.rows()) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_update_touches_one_attribute_of_one_row() {
        let list = fields();
        let updated = list.update(0, "value", "root").unwrap();

        assert_eq!(updated.get(0).unwrap().value, "root");
        assert_eq!(updated.get(0).unwrap().key, "username");
        assert!(Arc::ptr_eq(&updated.rows()[1], &list.rows()[1]));
        // previous list is not mutated
        assert_eq!(list.get(0).unwrap().value, "admin");
    }

    #[test]
    fn test_update_rejects_unknown_attribute() {
        let err = fields().update(0, "colour", "red").unwrap_err();
        assert_eq!(err, DomainError::UnknownAttribute("colour".into()));
    }

    #[test]
    fn test_update_out_of_range_is_noop() {
        let list = fields();
        let same = list.update(9, "value", "x").unwrap();
        assert_eq!(same, list);
    }

    #[test]
    fn test_password_type_marks_secret() {
        let list = FieldList::with_min_len(vec![AssetField::new("pin", FieldType::Text, "1", false)], 1);
        let updated = list.update(0, "type", "password").unwrap();
        assert!(updated.get(0).unwrap().secret);
        assert!(list.update(0, "secret", "maybe").is_err());
    }

    #[test]
    fn test_remove_keeps_order() {
        let list = fields().append(AssetField::new("url", FieldType::Url, "https://x", false));
        let removed = list.remove(1);
        let keys: Vec<&str> = removed.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["username", "url"]);
    }

    #[test]
    fn test_size_rows_parse_numbers() {
        let sizes = FieldList::<ShowroomSize>::default().append_blank();
        let sizes = sizes.update(0, "width", "12.5").unwrap();
        assert_eq!(sizes.get(0).unwrap().width, 12.5);
        assert_eq!(sizes.get(0).unwrap().unit, "m");
        assert!(sizes.update(0, "height", "-3").is_err());
        assert!(sizes.update(0, "height", "abc").is_err());
        // optional lists can be emptied
        assert!(sizes.remove(0).is_empty());
    }

    #[test]
    fn test_meta_rows() {
        let meta = FieldList::<MetaField>::default()
            .append_blank()
            .update(0, "key", "floor")
            .unwrap()
            .update(0, "value", "2")
            .unwrap();
        assert_eq!(meta.to_vec(), vec![MetaField { key: "floor".into(), value: "2".into() }]);
    }
}
