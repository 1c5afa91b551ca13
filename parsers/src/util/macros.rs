// Copyright (c) 2017-2018 Emmanuel Gil Peyrot <linkmauve@linkmauve.fr>
// Copyright (c) 2026 eveapi-rs contributors.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Read an attribute of a row and coerce it.
///
/// `Required` fails on absence, `Option` maps absence to `None`,
/// `OptionEmpty` maps absence and the empty string to `None`, `Default`
/// falls back to `Default::default()` and `Bool` is true only for `"1"`.
macro_rules! get_attr {
    ($elem:ident, $attr:tt, Bool) => {
        matches!($elem.attr($attr), ::std::option::Option::Some("1"))
    };
    ($elem:ident, $attr:tt, $type:tt) => {
        get_attr!(
            $elem,
            $attr,
            $type,
            value,
            value
                .parse()
                .map_err(|e| crate::error::Error::invalid_value($attr, e))?
        )
    };
    ($elem:ident, $attr:tt, OptionEmpty, $value:ident, $func:expr) => {
        match $elem.attr($attr) {
            ::std::option::Option::Some("") => ::std::option::Option::None,
            ::std::option::Option::Some($value) => ::std::option::Option::Some($func),
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
    ($elem:ident, $attr:tt, Option, $value:ident, $func:expr) => {
        match $elem.attr($attr) {
            ::std::option::Option::Some($value) => ::std::option::Option::Some($func),
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
    ($elem:ident, $attr:tt, Required, $value:ident, $func:expr) => {
        match $elem.attr($attr) {
            ::std::option::Option::Some($value) => $func,
            ::std::option::Option::None => {
                return ::std::result::Result::Err(crate::error::Error::MissingAttribute($attr));
            }
        }
    };
    ($elem:ident, $attr:tt, Default, $value:ident, $func:expr) => {
        match $elem.attr($attr) {
            ::std::option::Option::Some($value) => $func,
            ::std::option::Option::None => ::std::default::Default::default(),
        }
    };
}

/// Read the text of a named child element and coerce it.
///
/// Takes the same modes as [`get_attr!`], surrounding whitespace is ignored.
macro_rules! get_text {
    ($elem:ident, $name:tt, Bool) => {
        $elem
            .child_text($name)
            .is_some_and(|text| text.trim() == "1")
    };
    ($elem:ident, $name:tt, $type:tt) => {
        get_text!(
            $elem,
            $name,
            $type,
            value,
            value
                .trim()
                .parse()
                .map_err(|e| crate::error::Error::invalid_value($name, e))?
        )
    };
    ($elem:ident, $name:tt, OptionEmpty, $value:ident, $func:expr) => {
        match $elem.child_text($name) {
            ::std::option::Option::Some(ref $value) if !$value.trim().is_empty() => ::std::option::Option::Some($func),
            _ => ::std::option::Option::None,
        }
    };
    ($elem:ident, $name:tt, Option, $value:ident, $func:expr) => {
        match $elem.child_text($name) {
            ::std::option::Option::Some(ref $value) => ::std::option::Option::Some($func),
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
    ($elem:ident, $name:tt, Required, $value:ident, $func:expr) => {
        match $elem.child_text($name) {
            ::std::option::Option::Some(ref $value) => $func,
            ::std::option::Option::None => {
                return ::std::result::Result::Err(crate::error::Error::MissingElement($name));
            }
        }
    };
}

/// Fail unless the element is the one an extractor expects.
macro_rules! check_self {
    ($elem:ident, $name:tt) => {
        if !$elem.is($name) {
            return ::std::result::Result::Err(crate::error::Error::MissingElement($name));
        }
    };
}

/// Declare an enum for a closed set of wire values.
macro_rules! generate_attribute {
    ($(#[$meta:meta])* $elem:ident, $name:tt, {$($(#[$a_meta:meta])* $a:ident => $b:tt),+$(,)?}) => (
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $elem {
            $(
                $(#[$a_meta])*
                $a
            ),+
        }
        impl ::std::str::FromStr for $elem {
            type Err = crate::error::UnknownValue;
            fn from_str(s: &str) -> ::std::result::Result<$elem, crate::error::UnknownValue> {
                ::std::result::Result::Ok(match s {
                    $($b => $elem::$a),+,
                    _ => return ::std::result::Result::Err(crate::error::UnknownValue::new($name, s)),
                })
            }
        }
        impl ::std::fmt::Display for $elem {
            fn fmt(&self, fmt: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(fmt, "{}", match self {
                    $($elem::$a => $b),+
                })
            }
        }
    );
}
