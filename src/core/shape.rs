//! The value-object template every EC2 shape is stamped from.
//!
//! ```ignore
//! ec2_shape! {
//!     /// Describes a tag.
//!     pub struct Tag {
//!         /// The key of the tag.
//!         key: String => "Key",
//!         value: String => "Value",
//!     }
//! }
//! ```
//!
//! Field types are a single token: `String`, `i32`, `i64`, `f64`, `bool`,
//! `Timestamp`, another shape's name, or `[T]` for a list of any of those.
//! Every field is stored as `Option<_>` and gets a getter, `set_*`, `with_*`,
//! and (lists only) `extend_*`. The shape gets `Display`, `PartialEq`, `Hash`,
//! serde support keyed by wire name, and a fixed hash code. Equality goes
//! through `ShapeField::field_eq`, so float fields holding NaN still equal
//! themselves.

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_storage {
    ([$item:tt]) => { ::std::vec::Vec<$crate::__shape_storage!($item)> };
    (Timestamp) => { $crate::core::field::Timestamp };
    ($ty:ty) => { $ty };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_accessors {
    ($(#[$fmeta:meta])* $field:ident : String) => {
        $crate::__paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&str> {
                self.$field.as_deref()
            }

            pub fn [<set_ $field>](&mut self, $field: ::std::option::Option<::std::string::String>) {
                self.$field = $field;
            }

            pub fn [<with_ $field>](mut self, $field: impl ::std::convert::Into<::std::string::String>) -> Self {
                self.$field = ::std::option::Option::Some($field.into());
                self
            }
        }
    };
    ($(#[$fmeta:meta])* $field:ident : [$item:tt]) => {
        $crate::__shape_accessors!(@list $(#[$fmeta])* $field : $crate::__shape_storage!($item));
    };
    (@list $(#[$fmeta:meta])* $field:ident : $item:ty) => {
        $crate::__paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&[$item]> {
                self.$field.as_deref()
            }

            pub fn [<set_ $field>](&mut self, $field: ::std::option::Option<::std::vec::Vec<$item>>) {
                self.$field = $field;
            }

            /// Replaces the whole list.
            pub fn [<with_ $field>](mut self, $field: ::std::vec::Vec<$item>) -> Self {
                self.$field = ::std::option::Option::Some($field);
                self
            }

            /// Appends to the list, allocating it first if unset.
            pub fn [<extend_ $field>]<I>(mut self, items: I) -> Self
            where
                I: ::std::iter::IntoIterator,
                I::Item: ::std::convert::Into<$item>,
            {
                let items = items.into_iter();
                self.$field
                    .get_or_insert_with(|| ::std::vec::Vec::with_capacity(items.size_hint().0))
                    .extend(items.map(::std::convert::Into::into));
                self
            }
        }
    };
    ($(#[$fmeta:meta])* $field:ident : i32) => {
        $crate::__shape_accessors!(@copy $(#[$fmeta])* $field : i32);
    };
    ($(#[$fmeta:meta])* $field:ident : i64) => {
        $crate::__shape_accessors!(@copy $(#[$fmeta])* $field : i64);
    };
    ($(#[$fmeta:meta])* $field:ident : f64) => {
        $crate::__shape_accessors!(@copy $(#[$fmeta])* $field : f64);
    };
    ($(#[$fmeta:meta])* $field:ident : bool) => {
        $crate::__shape_accessors!(@copy $(#[$fmeta])* $field : bool);
    };
    ($(#[$fmeta:meta])* $field:ident : Timestamp) => {
        $crate::__shape_accessors!(@copy $(#[$fmeta])* $field : $crate::core::field::Timestamp);
    };
    (@copy $(#[$fmeta:meta])* $field:ident : $ty:ty) => {
        $crate::__paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<$ty> {
                self.$field
            }

            pub fn [<set_ $field>](&mut self, $field: ::std::option::Option<$ty>) {
                self.$field = $field;
            }

            pub fn [<with_ $field>](mut self, $field: $ty) -> Self {
                self.$field = ::std::option::Option::Some($field);
                self
            }
        }
    };
    ($(#[$fmeta:meta])* $field:ident : $ty:ident) => {
        $crate::__paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&$ty> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>](&mut self, $field: ::std::option::Option<$ty>) {
                self.$field = $field;
            }

            pub fn [<with_ $field>](mut self, $field: $ty) -> Self {
                self.$field = ::std::option::Option::Some($field);
                self
            }
        }
    };
}

#[macro_export]
macro_rules! ec2_shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $fty:tt => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: ::std::option::Option<$crate::__shape_storage!($fty)>,
            )*
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::__shape_accessors!($(#[$fmeta])* $field : $fty);
            )*
        }

        impl $crate::core::field::ShapeField for $name {
            fn render(&self, out: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, out)
            }

            fn hash_code(&self) -> i32 {
                $crate::core::field::combine_hash(&[
                    $($crate::core::field::option_hash(&self.$field)),*
                ])
            }

            fn field_eq(&self, other: &Self) -> bool {
                true $(&& $crate::core::field::option_eq(&self.$field, &other.$field))*
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::core::field::ShapeField::field_eq(self, other)
            }
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_assignments, unused_mut)]
            fn fmt(&self, out: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut separator = "";
                out.write_str("{")?;
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        out.write_str(separator)?;
                        out.write_str(concat!($wire, ": "))?;
                        $crate::core::field::ShapeField::render(value, out)?;
                        separator = ",";
                    }
                )*
                out.write_str("}")
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::core::field::ShapeField::hash_code(self));
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::field::ShapeField;
    use chrono::{TimeZone, Utc};

    crate::ec2_shape! {
        pub struct Probe {
            /// A documented field.
            name: String => "Name",
            count: i32 => "Count",
            size: i64 => "Size",
            ratio: f64 => "Ratio",
            enabled: bool => "Enabled",
            created: Timestamp => "Created",
            labels: [String] => "Labels",
            stamps: [Timestamp] => "Stamps",
            nested: Inner => "Nested",
            children: [Inner] => "Children",
        }
    }

    crate::ec2_shape! {
        pub struct Inner {
            id: String => "Id",
        }
    }

    #[test]
    fn test_getters_start_absent() {
        let probe = Probe::new();
        assert_eq!(probe.name(), None);
        assert_eq!(probe.count(), None);
        assert_eq!(probe.labels(), None);
        assert_eq!(probe.nested(), None);
        assert_eq!(probe, Probe::default());
    }

    #[test]
    fn test_set_and_with_agree() {
        let created = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();

        let mut set = Probe::new();
        set.set_name(Some("a".to_string()));
        set.set_count(Some(3));
        set.set_created(Some(created));
        set.set_nested(Some(Inner::new().with_id("x")));
        set.set_labels(Some(vec!["l".to_string()]));

        let with = Probe::new()
            .with_name("a")
            .with_count(3)
            .with_created(created)
            .with_nested(Inner::new().with_id("x"))
            .with_labels(vec!["l".to_string()]);

        assert_eq!(set, with);
        assert_eq!(set.hash_code(), with.hash_code());
        assert_eq!(with.nested().and_then(Inner::id), Some("x"));
    }

    #[test]
    fn test_extend_allocates_then_appends() {
        let probe = Probe::new().extend_labels(["a", "b", "c"]);
        let labels = probe.labels.as_ref().unwrap();
        assert!(labels.capacity() >= 3);
        assert_eq!(labels.len(), 3);

        let probe = probe.extend_labels(["d"]);
        assert_eq!(probe.labels().unwrap(), ["a", "b", "c", "d"]);

        let stamps = Probe::new().extend_stamps([Utc.timestamp_millis_opt(0).unwrap()]);
        assert_eq!(stamps.stamps().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_with_list_replaces() {
        let probe = Probe::new()
            .extend_children([Inner::new().with_id("1")])
            .with_children(vec![Inner::new().with_id("2")]);
        assert_eq!(probe.children().unwrap(), [Inner::new().with_id("2")]);
    }

    #[test]
    fn test_display_follows_declared_order() {
        let probe = Probe::new()
            .extend_labels(["x"])
            .with_enabled(false)
            .with_name("n")
            .with_ratio(0.5);
        assert_eq!(
            probe.to_string(),
            "{Name: n,Ratio: 0.5,Enabled: false,Labels: [x]}"
        );
    }

    #[test]
    fn test_hash_is_field_order_sensitive() {
        let expected = {
            let mut h = 1i32;
            for field in [0, 0, 7i64.hash_code(), 0, true.hash_code(), 0, 0, 0, 0, 0] {
                h = h.wrapping_mul(31).wrapping_add(field);
            }
            h
        };
        let probe = Probe::new().with_size(7).with_enabled(true);
        assert_eq!(probe.hash_code(), expected);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let probe = Probe::new()
            .with_name("n")
            .extend_children([Inner::new().with_id("c")]);
        let json = serde_json::to_string(&probe).unwrap();
        assert_eq!(json, r#"{"Name":"n","Children":[{"Id":"c"}]}"#);

        let back: Probe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, probe);
    }
}
