//! Per-point and per-cell attribute arrays.
//!
//! Attributes are stored as named [`DataArray`]s grouped into an
//! [`AttributeData`] container. Each array holds one tuple of
//! `num_components` values per mesh element. One array may be marked as the
//! active scalars, which is what scalar-driven algorithms read.

use crate::error::{MeshError, Result};

/// Typed storage for attribute values.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValues {
    /// Single-precision floating point values.
    F32(Vec<f32>),
    /// Double-precision floating point values.
    F64(Vec<f64>),
    /// 64-bit signed integer values.
    I64(Vec<i64>),
}

impl ArrayValues {
    fn len(&self) -> usize {
        match self {
            ArrayValues::F32(v) => v.len(),
            ArrayValues::F64(v) => v.len(),
            ArrayValues::I64(v) => v.len(),
        }
    }

    fn empty_like(&self, capacity: usize) -> Self {
        match self {
            ArrayValues::F32(_) => ArrayValues::F32(Vec::with_capacity(capacity)),
            ArrayValues::F64(_) => ArrayValues::F64(Vec::with_capacity(capacity)),
            ArrayValues::I64(_) => ArrayValues::I64(Vec::with_capacity(capacity)),
        }
    }
}

/// A named array of fixed-width tuples.
#[derive(Debug, Clone, PartialEq)]
pub struct DataArray {
    name: String,
    num_components: usize,
    values: ArrayValues,
}

impl DataArray {
    /// Create an array from raw values laid out tuple by tuple.
    ///
    /// Fails if `num_components` is zero or the value count is not a multiple
    /// of it.
    pub fn new(name: impl Into<String>, num_components: usize, values: ArrayValues) -> Result<Self> {
        if num_components == 0 {
            return Err(MeshError::invalid_param(
                "num_components",
                num_components,
                "must be at least 1",
            ));
        }
        if values.len() % num_components != 0 {
            return Err(MeshError::invalid_param(
                "values",
                values.len(),
                "length must be a multiple of the component count",
            ));
        }
        Ok(Self {
            name: name.into(),
            num_components,
            values,
        })
    }

    /// Create a one-component `f64` array.
    pub fn scalars_f64(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            num_components: 1,
            values: ArrayValues::F64(values),
        }
    }

    /// Create a one-component `f32` array.
    pub fn scalars_f32(name: impl Into<String>, values: Vec<f32>) -> Self {
        Self {
            name: name.into(),
            num_components: 1,
            values: ArrayValues::F32(values),
        }
    }

    /// Create a one-component `i64` array.
    pub fn scalars_i64(name: impl Into<String>, values: Vec<i64>) -> Self {
        Self {
            name: name.into(),
            num_components: 1,
            values: ArrayValues::I64(values),
        }
    }

    /// The array name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of components per tuple.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Number of tuples.
    pub fn num_tuples(&self) -> usize {
        self.values.len() / self.num_components
    }

    /// Raw values.
    pub fn values(&self) -> &ArrayValues {
        &self.values
    }

    /// Read one component of one tuple as `f64`.
    #[inline]
    pub fn component(&self, tuple: usize, component: usize) -> f64 {
        let i = tuple * self.num_components + component;
        match &self.values {
            ArrayValues::F32(v) => v[i] as f64,
            ArrayValues::F64(v) => v[i],
            ArrayValues::I64(v) => v[i] as f64,
        }
    }

    /// An empty array with the same name, type and width.
    pub(crate) fn empty_like(&self, capacity: usize) -> Self {
        Self {
            name: self.name.clone(),
            num_components: self.num_components,
            values: self.values.empty_like(capacity * self.num_components),
        }
    }

    /// Append tuple `tuple` of `src`, which must share this array's type and width.
    pub(crate) fn push_tuple_from(&mut self, src: &DataArray, tuple: usize) {
        let n = self.num_components;
        let range = tuple * n..(tuple + 1) * n;
        match (&mut self.values, &src.values) {
            (ArrayValues::F32(dst), ArrayValues::F32(s)) => dst.extend_from_slice(&s[range]),
            (ArrayValues::F64(dst), ArrayValues::F64(s)) => dst.extend_from_slice(&s[range]),
            (ArrayValues::I64(dst), ArrayValues::I64(s)) => dst.extend_from_slice(&s[range]),
            _ => unreachable!("array '{}' copied from a differently typed source", self.name),
        }
    }
}

/// A collection of attribute arrays attached to the points or cells of a mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeData {
    arrays: Vec<DataArray>,
    active_scalars: Option<usize>,
}

impl AttributeData {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of arrays.
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Whether there are no arrays.
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// All arrays in insertion order.
    pub fn arrays(&self) -> &[DataArray] {
        &self.arrays
    }

    /// Look up an array by name.
    pub fn array(&self, name: &str) -> Option<&DataArray> {
        self.arrays.iter().find(|a| a.name == name)
    }

    /// The active scalars, if any.
    pub fn scalars(&self) -> Option<&DataArray> {
        self.active_scalars.map(|i| &self.arrays[i])
    }

    /// Add an array and return its position. An array with the same name is replaced.
    pub(crate) fn add_array(&mut self, array: DataArray) -> usize {
        if let Some(i) = self.arrays.iter().position(|a| a.name == array.name) {
            self.arrays[i] = array;
            i
        } else {
            self.arrays.push(array);
            self.arrays.len() - 1
        }
    }

    /// Mark the array with the given name as the active scalars.
    ///
    /// Returns `false` if no such array exists.
    pub fn set_active_scalars(&mut self, name: &str) -> bool {
        match self.arrays.iter().position(|a| a.name == name) {
            Some(i) => {
                self.active_scalars = Some(i);
                true
            }
            None => false,
        }
    }

    /// Empty arrays mirroring `src`, sized for `capacity` tuples. The active
    /// scalars designation carries over.
    pub(crate) fn copy_allocate(src: &AttributeData, capacity: usize) -> Self {
        Self {
            arrays: src.arrays.iter().map(|a| a.empty_like(capacity)).collect(),
            active_scalars: src.active_scalars,
        }
    }

    /// Append tuple `tuple` of every array in `src`. `self` must have been
    /// created with [`AttributeData::copy_allocate`] from `src`.
    pub(crate) fn push_tuple_from(&mut self, src: &AttributeData, tuple: usize) {
        for (dst, s) in self.arrays.iter_mut().zip(&src.arrays) {
            dst.push_tuple_from(s, tuple);
        }
    }
}
