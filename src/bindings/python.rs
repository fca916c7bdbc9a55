// FFI Facade: exposes `Temperature` to Python as `_core.Temperature`.
// Python values are translated into the same loosely typed arguments the
// Rust constructors accept, so validation and error messages are shared.

use crate::temperature::{Arguments, Temperature, TemperatureError};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyString, PyTuple};
use serde_json::Value;

fn to_py_err(err: TemperatureError) -> PyErr {
    match err {
        TemperatureError::InvalidNumericOrTemperature(_) | TemperatureError::InvalidNumeric(_) => {
            PyTypeError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Translates a Python object into a loosely typed argument.
/// `bool` is checked before `int` because it is a subclass of it.
fn to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_none() {
        Ok(Value::Null)
    } else if obj.is_instance_of::<PyBool>() {
        Ok(Value::Bool(obj.extract()?))
    } else if obj.is_instance_of::<PyInt>() || obj.is_instance_of::<PyFloat>() {
        Ok(Value::from(obj.extract::<f64>()?))
    } else if obj.is_instance_of::<PyString>() {
        Ok(Value::String(obj.extract()?))
    } else {
        Ok(Value::String(obj.str()?.to_string()))
    }
}

/// Python view of a [`Temperature`].
///
/// Conversions return new Python objects; identity of cached conversions is
/// only observable from Rust.
#[pyclass(name = "Temperature", frozen)]
#[derive(Debug, Clone)]
pub struct PyTemperature {
    pub inner: Temperature,
}

impl From<Temperature> for PyTemperature {
    fn from(inner: Temperature) -> Self {
        Self { inner }
    }
}

#[pymethods]
impl PyTemperature {
    #[new]
    #[pyo3(signature = (*args, **kwargs))]
    pub fn new(args: &Bound<'_, PyTuple>, kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let mut arguments = Arguments::new();
        for arg in args.iter() {
            arguments = arguments.arg(to_value(&arg)?);
        }
        if let Some(kwargs) = kwargs {
            for (name, value) in kwargs.iter() {
                arguments = arguments.kwarg(name.extract::<String>()?, to_value(&value)?);
            }
        }
        Temperature::from_args(arguments).map(Self::from).map_err(to_py_err)
    }

    #[getter]
    pub fn degrees(&self) -> f64 {
        self.inner.degrees()
    }

    #[getter]
    pub fn scale(&self) -> &'static str {
        self.inner.scale().as_str()
    }

    pub fn set_degrees(&self, degrees: &Bound<'_, PyAny>) -> PyResult<Self> {
        self.inner.set_degrees(to_value(degrees)?).map(Self::from).map_err(to_py_err)
    }

    pub fn set_scale(&self, scale: &Bound<'_, PyAny>) -> PyResult<Self> {
        self.inner.set_scale(to_value(scale)?).map(Self::from).map_err(to_py_err)
    }

    pub fn to_scale(&self, scale: &Bound<'_, PyAny>) -> PyResult<Self> {
        self.inner.to_scale(to_value(scale)?).map(|t| Self::from(t.clone())).map_err(to_py_err)
    }

    pub fn to_celsius(&self) -> Self {
        self.inner.to_celsius().clone().into()
    }

    pub fn to_fahrenheit(&self) -> Self {
        self.inner.to_fahrenheit().clone().into()
    }

    pub fn to_kelvin(&self) -> Self {
        self.inner.to_kelvin().clone().into()
    }

    pub fn to_rankine(&self) -> Self {
        self.inner.to_rankine().clone().into()
    }

    pub fn boils_water(&self) -> bool {
        self.inner.boils_water()
    }

    pub fn freezes_water(&self) -> bool {
        self.inner.freezes_water()
    }

    fn __add__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        let result = match other.extract::<PyRef<'_, Self>>() {
            Ok(t) => self.inner.try_add(&t.inner),
            Err(_) => self.inner.try_add(to_value(other)?),
        };
        result.map(Self::from).map_err(to_py_err)
    }

    fn __sub__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        let result = match other.extract::<PyRef<'_, Self>>() {
            Ok(t) => self.inner.try_sub(&t.inner),
            Err(_) => self.inner.try_sub(to_value(other)?),
        };
        result.map(Self::from).map_err(to_py_err)
    }

    // Python's counterpart of the coercion hook: `10 + t` and `10 - t`.
    fn __radd__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        let (wrapped, receiver) = self.inner.coerce(to_value(other)?).map_err(to_py_err)?;
        Ok((&wrapped + receiver).into())
    }

    fn __rsub__(&self, other: &Bound<'_, PyAny>) -> PyResult<Self> {
        let (wrapped, receiver) = self.inner.coerce(to_value(other)?).map_err(to_py_err)?;
        Ok((&wrapped - receiver).into())
    }

    fn __neg__(&self) -> Self {
        (-&self.inner).into()
    }

    fn __eq__(&self, other: &Bound<'_, PyAny>) -> bool {
        match other.extract::<PyRef<'_, Self>>() {
            Ok(t) => self.inner == t.inner,
            Err(_) => false,
        }
    }

    fn __ne__(&self, other: &Bound<'_, PyAny>) -> bool {
        !self.__eq__(other)
    }

    // Non-temperature operands fail extraction, which makes PyO3 return
    // `NotImplemented`; Python then raises `TypeError`.
    fn __lt__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner < other.inner
    }

    fn __le__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner <= other.inner
    }

    fn __gt__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner > other.inner
    }

    fn __ge__(&self, other: PyRef<'_, Self>) -> bool {
        self.inner >= other.inner
    }

    fn __repr__(&self) -> String {
        self.inner.to_string()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

// --- Module Definition ---
/// This function defines the `basic_temperature._core` Python module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTemperature>()?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    // Runs a script with `Temperature` and `__version__` from the module in scope.
    fn run(script: &CStr) {
        Python::initialize();
        Python::attach(|py| {
            let module = PyModule::new(py, "_core").unwrap();
            _core(&module).unwrap();

            let globals = PyDict::new(py);
            globals.set_item("Temperature", module.getattr("Temperature").unwrap()).unwrap();
            globals.set_item("__version__", module.getattr("__version__").unwrap()).unwrap();

            if let Err(err) = py.run(script, Some(&globals), None) {
                err.print(py);
                panic!("python script failed: {err}");
            }
        });
    }

    #[test]
    fn test_construction_forms() {
        run(c"
t = Temperature(20, 'celsius')
assert t.degrees == 20.0 and t.scale == 'celsius'
assert str(Temperature(degrees='0', scale='kelvin')) == '0 K'
assert __version__
");
    }

    #[test]
    fn test_construction_guard_raises_value_error() {
        run(c"
for args, kwargs in [((0, 'celsius'), {'degrees': 0}), ((), {})]:
    try:
        Temperature(*args, **kwargs)
    except ValueError as err:
        assert 'mixed or neither' in str(err), err
    else:
        raise AssertionError((args, kwargs))
");
    }

    #[test]
    fn test_bool_is_not_numeric_degrees() {
        run(c"
try:
    Temperature(True, 'celsius')
except ValueError as err:
    assert str(err) == 'degree is NOT a numeric value.', err
else:
    raise AssertionError('bool accepted as degrees')

try:
    Temperature(0, 'Celsius')
except ValueError as err:
    assert 'valid values are' in str(err), err
else:
    raise AssertionError('scale accepted')
");
    }

    #[test]
    fn test_operand_errors_raise_type_error() {
        run(c"
t = Temperature(20, 'celsius')
for op in (lambda: t + 'abc', lambda: t - [1], lambda: 'abc' + t):
    try:
        op()
    except TypeError:
        pass
    else:
        raise AssertionError('operand accepted')
");
    }

    #[test]
    fn test_arithmetic() {
        run(c"
t = Temperature(20, 'celsius')
assert str(10 - t) == '-10 °C', str(10 - t)
assert str(10 + t) == '30 °C'
assert str(t + 5.5) == '25.5 °C'
assert str(-t) == '-20 °C'
total = Temperature(0, 'celsius') + Temperature(30, 'kelvin')
assert total.scale == 'kelvin'
assert abs(total.degrees - 303.15) < 0.01
");
    }

    #[test]
    fn test_comparison() {
        run(c"
t = Temperature(20, 'celsius')
assert t == Temperature(68, 'fahrenheit')
assert t != Temperature(21, 'celsius')
assert not (t == 'abc')
assert t != 20
assert t < Temperature(300, 'kelvin') <= Temperature(300, 'kelvin')
assert t.to_kelvin() > t.to_fahrenheit().set_degrees(0)
assert t.set_scale('kelvin').degrees == t.to_kelvin().degrees
assert Temperature(100, 'celsius').boils_water()
assert Temperature(32, 'fahrenheit').freezes_water()
");
    }
}
