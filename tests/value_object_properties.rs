//! Property tests for the behavior every shape shares: accessors, fluent
//! construction, equality, hashing, list accumulation and rendering.

use ec2_model::domain::model::{EbsBlockDevice, Filter, Placement, PricingDetail, Tag};
use ec2_model::ShapeField;
use proptest::option;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/_.:-]{0,24}"
}

fn arb_ebs() -> impl Strategy<Value = EbsBlockDevice> {
    (
        option::of(any::<bool>()),
        option::of(any::<i32>()),
        option::of(arb_text()),
        option::of(1..16384i32),
        option::of(prop_oneof!["gp2", "io1", "st1", "sc1", "standard"]),
        option::of(arb_text()),
        option::of(any::<bool>()),
    )
        .prop_map(
            |(delete_on_termination, iops, snapshot_id, volume_size, volume_type, kms_key_id, encrypted)| {
                let mut ebs = EbsBlockDevice::new();
                ebs.set_delete_on_termination(delete_on_termination);
                ebs.set_iops(iops);
                ebs.set_snapshot_id(snapshot_id);
                ebs.set_volume_size(volume_size);
                ebs.set_volume_type(volume_type);
                ebs.set_kms_key_id(kms_key_id);
                ebs.set_encrypted(encrypted);
                ebs
            },
        )
}

fn arb_pricing() -> impl Strategy<Value = PricingDetail> {
    (option::of(any::<i32>()), option::of(any::<f64>())).prop_map(|(count, price)| {
        let mut detail = PricingDetail::new();
        detail.set_count(count);
        detail.set_price(price);
        detail
    })
}

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn prop_getter_returns_last_value_set(first in arb_text(), second in arb_text(), zone in option::of(arb_text())) {
        let mut placement = Placement::new();
        placement.set_group_name(Some(first));
        placement.set_group_name(Some(second.clone()));
        placement.set_availability_zone(zone.clone());

        prop_assert_eq!(placement.group_name(), Some(second.as_str()));
        prop_assert_eq!(placement.availability_zone(), zone.as_deref());
        prop_assert_eq!(placement.tenancy(), None);
        prop_assert_eq!(placement.partition_number(), None);
    }

    #[test]
    fn prop_with_and_set_build_equal_objects(
        zone in arb_text(),
        partition in any::<i32>(),
        tenancy in prop_oneof!["default", "dedicated", "host"],
    ) {
        let chained = Placement::new()
            .with_availability_zone(zone.clone())
            .with_partition_number(partition)
            .with_tenancy(tenancy.clone());

        let mut assigned = Placement::new();
        assigned.set_availability_zone(Some(zone));
        assigned.set_partition_number(Some(partition));
        assigned.set_tenancy(Some(tenancy));

        prop_assert_eq!(&chained, &assigned);
        prop_assert_eq!(chained.hash_code(), assigned.hash_code());
    }

    #[test]
    fn prop_equality_is_reflexive_and_symmetric(a in arb_ebs(), b in arb_ebs()) {
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn prop_float_shapes_are_reflexive(detail in arb_pricing(), other in arb_pricing()) {
        prop_assert_eq!(&detail, &detail);
        prop_assert_eq!(&detail, &detail.clone());
        prop_assert_eq!(detail == other, other == detail);
    }

    #[test]
    fn prop_single_field_change_breaks_equality(ebs in arb_ebs(), size in 1..16384i32) {
        let changed = ebs.clone().with_volume_size(size);
        if ebs.volume_size() == Some(size) {
            prop_assert_eq!(&changed, &ebs);
        } else {
            prop_assert_ne!(&changed, &ebs);
        }
    }

    #[test]
    fn prop_equal_objects_hash_alike(ebs in arb_ebs()) {
        let copy = ebs.clone();
        prop_assert_eq!(ebs.hash_code(), copy.hash_code());
        prop_assert_eq!(std_hash(&ebs), std_hash(&copy));
    }

    #[test]
    fn prop_extend_accumulates_in_call_order(
        first in prop::collection::vec(arb_text(), 0..8),
        second in prop::collection::vec(arb_text(), 0..8),
    ) {
        let filter = Filter::new()
            .with_name("tag:Name")
            .extend_values(first.clone())
            .extend_values(second.clone());

        let expected: Vec<String> = first.into_iter().chain(second).collect();
        prop_assert_eq!(filter.values(), Some(expected.as_slice()));
    }

    #[test]
    fn prop_display_omits_unset_fields(key in option::of("[a-z]{1,8}"), value in option::of("[a-z]{1,8}")) {
        let mut tag = Tag::new();
        tag.set_key(key.clone());
        tag.set_value(value.clone());

        let rendered = tag.to_string();
        let expected_parts: Vec<String> = [("Key", key), ("Value", value)]
            .into_iter()
            .filter_map(|(name, v)| v.map(|v| format!("{}: {}", name, v)))
            .collect();

        prop_assert_eq!(rendered, format!("{{{}}}", expected_parts.join(",")));
    }

    #[test]
    fn prop_float_fields_equal_means_same_hash(count in any::<i32>(), price in any::<f64>()) {
        let a = PricingDetail::new().with_count(count).with_price(price);
        let b = PricingDetail::new().with_count(count).with_price(price);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
        prop_assert_eq!(std_hash(&a), std_hash(&b));
    }

    #[test]
    fn prop_equal_float_shapes_hash_alike(a in arb_pricing(), b in arb_pricing()) {
        if a == b {
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }
    }
}

#[test]
fn test_negative_zero_price_hashes_like_zero() {
    let positive = PricingDetail::new().with_price(0.0);
    let negative = PricingDetail::new().with_price(-0.0);
    assert_eq!(positive, negative);
    assert_eq!(positive.hash_code(), negative.hash_code());
}

#[test]
fn test_nan_price_equals_itself() {
    let detail = PricingDetail::new().with_count(2).with_price(f64::NAN);
    assert_eq!(detail, detail.clone());
    assert_eq!(detail, PricingDetail::new().with_count(2).with_price(-f64::NAN));
    assert_eq!(detail.hash_code(), detail.clone().hash_code());
    assert_ne!(detail, PricingDetail::new().with_count(2).with_price(0.0));

    let infinite = PricingDetail::new().with_price(f64::INFINITY);
    assert_eq!(infinite, infinite.clone());
    assert_ne!(infinite, PricingDetail::new().with_price(f64::NEG_INFINITY));
}

#[test]
fn test_absent_fields_contribute_zero() {
    let empty = EbsBlockDevice::new();
    // Seven absent fields: 31^7
    assert_eq!(empty.hash_code(), 31i32.wrapping_pow(7));
}
