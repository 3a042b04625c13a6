//! Reserved Instance offerings and purchased Reserved Instances.

use super::common::{Filter, Tag};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes Reserved Instance offerings that are available for purchase.
    ///
    /// Offerings from AWS and, when `include_marketplace` is set, from the
    /// Reserved Instance Marketplace are returned.
    pub struct DescribeReservedInstancesOfferingsRequest {
        availability_zone: String => "AvailabilityZone",
        filters: [Filter] => "Filters",
        include_marketplace: bool => "IncludeMarketplace",
        /// One of `InstanceType`.
        instance_type: String => "InstanceType",
        /// Seconds. Default 94608000 (3 years).
        max_duration: i64 => "MaxDuration",
        /// Default 20.
        max_instance_count: i32 => "MaxInstanceCount",
        /// Seconds. Default 2592000 (1 month).
        min_duration: i64 => "MinDuration",
        /// One of `OfferingClassType`.
        offering_class: String => "OfferingClass",
        /// One of `RIProductDescription`.
        product_description: String => "ProductDescription",
        reserved_instances_offering_ids: [String] => "ReservedInstancesOfferingIds",
        dry_run: bool => "DryRun",
        /// One of `Tenancy`. Default `default`.
        instance_tenancy: String => "InstanceTenancy",
        /// Maximum 100. Default 100.
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
        /// One of `OfferingTypeValues`.
        offering_type: String => "OfferingType",
    }
}

ec2_request!(
    DescribeReservedInstancesOfferingsRequest => "DescribeReservedInstancesOfferings",
    paginated by DescribeReservedInstancesOfferingsResult
);

ec2_shape! {
    pub struct DescribeReservedInstancesOfferingsResult {
        reserved_instances_offerings: [ReservedInstancesOffering] => "ReservedInstancesOfferings",
        next_token: String => "NextToken",
    }
}

ec2_shape! {
    /// Describes a Reserved Instance offering.
    pub struct PricingDetail {
        /// The number of reservations available for the price.
        count: i32 => "Count",
        price: f64 => "Price",
    }
}

ec2_shape! {
    /// Describes a recurring charge.
    pub struct RecurringCharge {
        amount: f64 => "Amount",
        /// One of `RecurringChargeFrequency`.
        frequency: String => "Frequency",
    }
}

ec2_shape! {
    pub struct ReservedInstancesOffering {
        availability_zone: String => "AvailabilityZone",
        /// Seconds.
        duration: i64 => "Duration",
        fixed_price: f64 => "FixedPrice",
        instance_type: String => "InstanceType",
        product_description: String => "ProductDescription",
        reserved_instances_offering_id: String => "ReservedInstancesOfferingId",
        usage_price: f64 => "UsagePrice",
        /// ISO 4217. At this time the only supported currency is `USD`.
        currency_code: String => "CurrencyCode",
        instance_tenancy: String => "InstanceTenancy",
        /// Whether the offering comes from the Reserved Instance Marketplace.
        marketplace: bool => "Marketplace",
        offering_class: String => "OfferingClass",
        offering_type: String => "OfferingType",
        pricing_details: [PricingDetail] => "PricingDetails",
        recurring_charges: [RecurringCharge] => "RecurringCharges",
        /// One of `Scope`.
        scope: String => "Scope",
    }
}

impl ReservedInstancesOffering {
    /// Upfront price plus hourly charges over the whole term.
    ///
    /// `None` when the fixed price or the duration is missing.
    pub fn effective_cost(&self) -> Option<f64> {
        let hours = self.duration()? as f64 / 3600.0;
        let hourly: f64 = self.usage_price().unwrap_or(0.0)
            + self
                .recurring_charges()
                .unwrap_or_default()
                .iter()
                .filter_map(RecurringCharge::amount)
                .sum::<f64>();
        Some(self.fixed_price()? + hourly * hours)
    }
}

ec2_shape! {
    /// Describes one or more of the Reserved Instances that you purchased.
    pub struct DescribeReservedInstancesRequest {
        filters: [Filter] => "Filters",
        /// One of `OfferingClassType`.
        offering_class: String => "OfferingClass",
        reserved_instances_ids: [String] => "ReservedInstancesIds",
        dry_run: bool => "DryRun",
        /// One of `OfferingTypeValues`.
        offering_type: String => "OfferingType",
    }
}

ec2_request!(DescribeReservedInstancesRequest => "DescribeReservedInstances");

ec2_shape! {
    pub struct DescribeReservedInstancesResult {
        reserved_instances: [ReservedInstances] => "ReservedInstances",
    }
}

ec2_shape! {
    /// Describes a Reserved Instance.
    pub struct ReservedInstances {
        availability_zone: String => "AvailabilityZone",
        duration: i64 => "Duration",
        end: Timestamp => "End",
        fixed_price: f64 => "FixedPrice",
        instance_count: i32 => "InstanceCount",
        instance_type: String => "InstanceType",
        product_description: String => "ProductDescription",
        reserved_instances_id: String => "ReservedInstancesId",
        start: Timestamp => "Start",
        /// `payment-pending`, `active`, `payment-failed` or `retired`.
        state: String => "State",
        usage_price: f64 => "UsagePrice",
        currency_code: String => "CurrencyCode",
        instance_tenancy: String => "InstanceTenancy",
        offering_class: String => "OfferingClass",
        offering_type: String => "OfferingType",
        recurring_charges: [RecurringCharge] => "RecurringCharges",
        scope: String => "Scope",
        tags: [Tag] => "Tags",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::ShapeField;
    use crate::domain::model::enums::{
        OfferingClassType, OfferingTypeValues, RIProductDescription, RecurringChargeFrequency,
    };

    #[test]
    fn test_offering_filters() {
        let request = DescribeReservedInstancesOfferingsRequest::new()
            .with_instance_type("c5.large")
            .with_product_description(RIProductDescription::LinuxUnixAmazonVpc)
            .with_offering_class(OfferingClassType::Convertible)
            .with_offering_type(OfferingTypeValues::NoUpfront)
            .with_min_duration(31_536_000)
            .with_max_duration(94_608_000);

        assert_eq!(request.product_description(), Some("Linux/UNIX (Amazon VPC)"));
        assert_eq!(request.offering_type(), Some("No Upfront"));
        assert_eq!(request.max_duration(), Some(94_608_000));
        assert!(request.to_string().contains("MinDuration: 31536000,OfferingClass: convertible"));
    }

    #[test]
    fn test_effective_cost() {
        let offering = ReservedInstancesOffering::new()
            .with_duration(3600 * 10)
            .with_fixed_price(100.0)
            .with_usage_price(0.5)
            .extend_recurring_charges([RecurringCharge::new()
                .with_amount(0.25)
                .with_frequency(RecurringChargeFrequency::Hourly)]);

        assert_eq!(offering.effective_cost(), Some(107.5));
        assert_eq!(ReservedInstancesOffering::new().with_fixed_price(1.0).effective_cost(), None);
    }

    #[test]
    fn test_float_fields_hash_like_doubles() {
        let detail = PricingDetail::new().with_count(3).with_price(1.0);
        assert_eq!(detail.hash_code(), 31 * (31 + 3) + 1.0f64.hash_code());
        assert_eq!(detail.to_string(), "{Count: 3,Price: 1.0}");
    }
}
