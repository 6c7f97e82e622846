//! Converters for smart enumerations

use crate::converter::StringConverter;
use calends_core::{short_type_name, Enumeration, Result};
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rendering {
    Name,
    Value,
}

/// Converts an enumeration to and from text
///
/// Text that parses as an integer is looked up by value, anything else by
/// name (ignoring case). Values render as their name, or as their value
/// digits for a converter built with [`EnumerationConverter::to_value`].
pub struct EnumerationConverter<E> {
    rendering: Rendering,
    null_to_empty: bool,
    _enumeration: PhantomData<fn() -> E>,
}

impl<E: Enumeration> EnumerationConverter<E> {
    /// Render instances by name
    pub fn new() -> Self {
        Self::with_rendering(Rendering::Name)
    }

    /// Render instances by value
    pub fn to_value() -> Self {
        Self::with_rendering(Rendering::Value)
    }

    fn with_rendering(rendering: Rendering) -> Self {
        EnumerationConverter {
            rendering,
            null_to_empty: false,
            _enumeration: PhantomData,
        }
    }

    /// Convert a missing value to `""` instead of failing
    pub fn null_to_empty_string(mut self, enabled: bool) -> Self {
        self.null_to_empty = enabled;
        self
    }
}

impl<E: Enumeration> Default for EnumerationConverter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Enumeration> StringConverter for EnumerationConverter<E> {
    type Value = E;
    type Output = &'static E;

    fn parse(&self, s: &str) -> Result<&'static E> {
        // Integer text may carry surrounding tabs, line breaks or spaces
        match s.trim_matches(is_number_white).parse::<i32>() {
            Ok(value) => E::from_value(value),
            Err(_) => E::from_name(s),
        }
    }

    fn stringify(&self, value: &E) -> String {
        match self.rendering {
            Rendering::Name => value.name().to_string(),
            Rendering::Value => value.value().to_string(),
        }
    }

    fn name(&self) -> String {
        let converter = match self.rendering {
            Rendering::Name => "EnumerationConverter",
            Rendering::Value => "EnumerationToValueConverter",
        };
        format!("{}<{}>", converter, short_type_name(std::any::type_name::<E>()))
    }

    fn supports_null_to_empty_string(&self) -> bool {
        self.null_to_empty
    }
}

fn is_number_white(c: char) -> bool {
    c == ' ' || ('\t'..='\r').contains(&c)
}
