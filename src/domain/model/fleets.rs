//! EC2 Fleets.

use super::common::{Filter, Tag};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    pub struct DescribeFleetsRequest {
        dry_run: bool => "DryRun",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
        /// Up to 1000 fleet IDs.
        fleet_ids: [String] => "FleetIds",
        /// For example `activity-status`, `fleet-state` or `type`.
        filters: [Filter] => "Filters",
    }
}

ec2_request!(DescribeFleetsRequest => "DescribeFleets", paginated by DescribeFleetsResult);

ec2_shape! {
    pub struct DescribeFleetsResult {
        next_token: String => "NextToken",
        fleets: [FleetData] => "Fleets",
    }
}

ec2_shape! {
    /// Identifies a launch template by ID or name, plus a version.
    pub struct FleetLaunchTemplateSpecification {
        launch_template_id: String => "LaunchTemplateId",
        launch_template_name: String => "LaunchTemplateName",
        /// A version number, `$Latest` or `$Default`.
        version: String => "Version",
    }
}

ec2_shape! {
    pub struct PlacementResponse {
        group_name: String => "GroupName",
    }
}

ec2_shape! {
    /// Overrides for a launch template.
    pub struct FleetLaunchTemplateOverrides {
        /// One of `InstanceType`.
        instance_type: String => "InstanceType",
        max_price: String => "MaxPrice",
        subnet_id: String => "SubnetId",
        availability_zone: String => "AvailabilityZone",
        /// The number of units provided by the instance type.
        weighted_capacity: f64 => "WeightedCapacity",
        /// Lower numbers win when the on-demand strategy is `prioritized`.
        priority: f64 => "Priority",
        placement: PlacementResponse => "Placement",
    }
}

ec2_shape! {
    pub struct FleetLaunchTemplateConfig {
        launch_template_specification: FleetLaunchTemplateSpecification => "LaunchTemplateSpecification",
        overrides: [FleetLaunchTemplateOverrides] => "Overrides",
    }
}

ec2_shape! {
    /// The number of units to request, split between On-Demand and Spot.
    pub struct TargetCapacitySpecification {
        total_target_capacity: i32 => "TotalTargetCapacity",
        on_demand_target_capacity: i32 => "OnDemandTargetCapacity",
        spot_target_capacity: i32 => "SpotTargetCapacity",
        /// One of `DefaultTargetCapacityType`.
        default_target_capacity_type: String => "DefaultTargetCapacityType",
    }
}

ec2_shape! {
    /// The configuration of Spot Instances in an EC2 Fleet.
    pub struct SpotOptions {
        /// `lowest-price`, `diversified` or `capacity-optimized`.
        allocation_strategy: String => "AllocationStrategy",
        /// One of `InstanceInterruptionBehavior`.
        instance_interruption_behavior: String => "InstanceInterruptionBehavior",
        /// Only for the `lowest-price` strategy.
        instance_pools_to_use_count: i32 => "InstancePoolsToUseCount",
        single_instance_type: bool => "SingleInstanceType",
        single_availability_zone: bool => "SingleAvailabilityZone",
        min_target_capacity: i32 => "MinTargetCapacity",
        max_total_price: String => "MaxTotalPrice",
    }
}

ec2_shape! {
    /// The configuration of On-Demand Instances in an EC2 Fleet.
    pub struct OnDemandOptions {
        /// `lowest-price` or `prioritized`.
        allocation_strategy: String => "AllocationStrategy",
        single_instance_type: bool => "SingleInstanceType",
        single_availability_zone: bool => "SingleAvailabilityZone",
        min_target_capacity: i32 => "MinTargetCapacity",
        max_total_price: String => "MaxTotalPrice",
    }
}

ec2_shape! {
    pub struct LaunchTemplateAndOverridesResponse {
        launch_template_specification: FleetLaunchTemplateSpecification => "LaunchTemplateSpecification",
        overrides: FleetLaunchTemplateOverrides => "Overrides",
    }
}

ec2_shape! {
    /// Describes the instances that could not be launched by the fleet.
    pub struct DescribeFleetError {
        launch_template_and_overrides: LaunchTemplateAndOverridesResponse => "LaunchTemplateAndOverrides",
        /// One of `InstanceLifecycle`: `spot` or `on-demand`.
        lifecycle: String => "Lifecycle",
        error_code: String => "ErrorCode",
        error_message: String => "ErrorMessage",
    }
}

ec2_shape! {
    /// Describes the instances that were launched by the fleet.
    pub struct DescribeFleetsInstances {
        launch_template_and_overrides: LaunchTemplateAndOverridesResponse => "LaunchTemplateAndOverrides",
        lifecycle: String => "Lifecycle",
        instance_ids: [String] => "InstanceIds",
        instance_type: String => "InstanceType",
        /// One of `PlatformValues`.
        platform: String => "Platform",
    }
}

ec2_shape! {
    /// Describes an EC2 Fleet.
    pub struct FleetData {
        /// One of `FleetActivityStatus`. Only for fleets of type `maintain`.
        activity_status: String => "ActivityStatus",
        create_time: Timestamp => "CreateTime",
        fleet_id: String => "FleetId",
        /// One of `FleetStateCode`.
        fleet_state: String => "FleetState",
        client_token: String => "ClientToken",
        /// One of `FleetExcessCapacityTerminationPolicy`.
        excess_capacity_termination_policy: String => "ExcessCapacityTerminationPolicy",
        fulfilled_capacity: f64 => "FulfilledCapacity",
        fulfilled_on_demand_capacity: f64 => "FulfilledOnDemandCapacity",
        launch_template_configs: [FleetLaunchTemplateConfig] => "LaunchTemplateConfigs",
        target_capacity_specification: TargetCapacitySpecification => "TargetCapacitySpecification",
        terminate_instances_with_expiration: bool => "TerminateInstancesWithExpiration",
        /// One of `FleetType`. Default `maintain`.
        type_value: String => "Type",
        valid_from: Timestamp => "ValidFrom",
        valid_until: Timestamp => "ValidUntil",
        replace_unhealthy_instances: bool => "ReplaceUnhealthyInstances",
        spot_options: SpotOptions => "SpotOptions",
        on_demand_options: OnDemandOptions => "OnDemandOptions",
        tags: [Tag] => "Tags",
        errors: [DescribeFleetError] => "Errors",
        instances: [DescribeFleetsInstances] => "Instances",
    }
}

impl FleetData {
    /// All instance IDs launched by the fleet, across launch template configurations.
    pub fn instance_ids(&self) -> Vec<&str> {
        self.instances()
            .unwrap_or_default()
            .iter()
            .flat_map(|group| group.instance_ids().unwrap_or_default())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::ShapeField;
    use crate::domain::model::enums::{DefaultTargetCapacityType, FleetStateCode, FleetType};

    fn fleet() -> FleetData {
        FleetData::new()
            .with_fleet_id("fleet-1")
            .with_fleet_state(FleetStateCode::Active)
            .with_type_value(FleetType::Maintain)
            .with_target_capacity_specification(
                TargetCapacitySpecification::new()
                    .with_total_target_capacity(4)
                    .with_default_target_capacity_type(DefaultTargetCapacityType::OnDemand),
            )
            .extend_instances([
                DescribeFleetsInstances::new().extend_instance_ids(["i-1", "i-2"]),
                DescribeFleetsInstances::new()
                    .with_lifecycle("spot")
                    .extend_instance_ids(["i-3"]),
            ])
    }

    #[test]
    fn test_instance_ids_across_groups() {
        assert_eq!(fleet().instance_ids(), vec!["i-1", "i-2", "i-3"]);
        assert!(FleetData::new().instance_ids().is_empty());
    }

    #[test]
    fn test_equal_fleets_share_hash() {
        let a = fleet();
        let b = fleet();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());

        let c = fleet().with_fulfilled_capacity(2.0);
        assert_ne!(a, c);
        assert_eq!(
            a.target_capacity_specification()
                .and_then(TargetCapacitySpecification::default_target_capacity_type),
            Some("on-demand")
        );
    }
}
