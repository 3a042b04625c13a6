//! Spot Fleet requests.

use super::common::{
    BlockDeviceMapping, GroupIdentifier, IamInstanceProfileSpecification,
    InstanceNetworkInterfaceSpecification, SpotPlacement, Tag, TagSpecification,
};
use super::fleets::FleetLaunchTemplateSpecification;
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes your Spot Fleet requests. Requests are deleted 48 hours after
    /// they are cancelled and their instances are terminated.
    pub struct DescribeSpotFleetRequestsRequest {
        dry_run: bool => "DryRun",
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
        spot_fleet_request_ids: [String] => "SpotFleetRequestIds",
    }
}

ec2_request!(
    DescribeSpotFleetRequestsRequest => "DescribeSpotFleetRequests",
    paginated by DescribeSpotFleetRequestsResult
);

ec2_shape! {
    pub struct DescribeSpotFleetRequestsResult {
        next_token: String => "NextToken",
        spot_fleet_request_configs: [SpotFleetRequestConfig] => "SpotFleetRequestConfigs",
    }
}

ec2_shape! {
    pub struct SpotFleetMonitoring {
        /// Default `false`.
        enabled: bool => "Enabled",
    }
}

ec2_shape! {
    /// The tags for a Spot Fleet resource.
    pub struct SpotFleetTagSpecification {
        /// Only `instance` is supported.
        resource_type: String => "ResourceType",
        tags: [Tag] => "Tags",
    }
}

ec2_shape! {
    /// Describes the launch specification for one or more Spot Instances.
    pub struct SpotFleetLaunchSpecification {
        security_groups: [GroupIdentifier] => "SecurityGroups",
        /// Deprecated.
        addressing_type: String => "AddressingType",
        block_device_mappings: [BlockDeviceMapping] => "BlockDeviceMappings",
        ebs_optimized: bool => "EbsOptimized",
        iam_instance_profile: IamInstanceProfileSpecification => "IamInstanceProfile",
        image_id: String => "ImageId",
        /// One of `InstanceType`.
        instance_type: String => "InstanceType",
        kernel_id: String => "KernelId",
        key_name: String => "KeyName",
        monitoring: SpotFleetMonitoring => "Monitoring",
        network_interfaces: [InstanceNetworkInterfaceSpecification] => "NetworkInterfaces",
        placement: SpotPlacement => "Placement",
        ramdisk_id: String => "RamdiskId",
        spot_price: String => "SpotPrice",
        /// Separate multiple subnets with commas.
        subnet_id: String => "SubnetId",
        user_data: String => "UserData",
        weighted_capacity: f64 => "WeightedCapacity",
        tag_specifications: [SpotFleetTagSpecification] => "TagSpecifications",
    }
}

ec2_shape! {
    pub struct LaunchTemplateOverrides {
        instance_type: String => "InstanceType",
        spot_price: String => "SpotPrice",
        subnet_id: String => "SubnetId",
        availability_zone: String => "AvailabilityZone",
        weighted_capacity: f64 => "WeightedCapacity",
        priority: f64 => "Priority",
    }
}

ec2_shape! {
    pub struct LaunchTemplateConfig {
        launch_template_specification: FleetLaunchTemplateSpecification => "LaunchTemplateSpecification",
        overrides: [LaunchTemplateOverrides] => "Overrides",
    }
}

ec2_shape! {
    pub struct ClassicLoadBalancer {
        name: String => "Name",
    }
}

ec2_shape! {
    pub struct ClassicLoadBalancersConfig {
        /// 1 to 5 load balancers.
        classic_load_balancers: [ClassicLoadBalancer] => "ClassicLoadBalancers",
    }
}

ec2_shape! {
    pub struct TargetGroup {
        arn: String => "Arn",
    }
}

ec2_shape! {
    pub struct TargetGroupsConfig {
        /// 1 to 5 target groups.
        target_groups: [TargetGroup] => "TargetGroups",
    }
}

ec2_shape! {
    /// The Classic Load Balancers and target groups to attach to a Spot Fleet request.
    pub struct LoadBalancersConfig {
        classic_load_balancers_config: ClassicLoadBalancersConfig => "ClassicLoadBalancersConfig",
        target_groups_config: TargetGroupsConfig => "TargetGroupsConfig",
    }
}

ec2_shape! {
    /// Describes the configuration of a Spot Fleet request.
    pub struct SpotFleetRequestConfigData {
        /// One of `AllocationStrategy`. Default `lowestPrice`.
        allocation_strategy: String => "AllocationStrategy",
        /// One of `OnDemandAllocationStrategy`.
        on_demand_allocation_strategy: String => "OnDemandAllocationStrategy",
        client_token: String => "ClientToken",
        /// One of `ExcessCapacityTerminationPolicy`.
        excess_capacity_termination_policy: String => "ExcessCapacityTerminationPolicy",
        fulfilled_capacity: f64 => "FulfilledCapacity",
        on_demand_fulfilled_capacity: f64 => "OnDemandFulfilledCapacity",
        /// Grants the Spot Fleet permission to request, launch, terminate and tag instances.
        iam_fleet_role: String => "IamFleetRole",
        /// Cannot be combined with `launch_template_configs`.
        launch_specifications: [SpotFleetLaunchSpecification] => "LaunchSpecifications",
        launch_template_configs: [LaunchTemplateConfig] => "LaunchTemplateConfigs",
        spot_price: String => "SpotPrice",
        target_capacity: i32 => "TargetCapacity",
        on_demand_target_capacity: i32 => "OnDemandTargetCapacity",
        on_demand_max_total_price: String => "OnDemandMaxTotalPrice",
        spot_max_total_price: String => "SpotMaxTotalPrice",
        terminate_instances_with_expiration: bool => "TerminateInstancesWithExpiration",
        /// One of `FleetType`. Default `maintain`.
        type_value: String => "Type",
        valid_from: Timestamp => "ValidFrom",
        valid_until: Timestamp => "ValidUntil",
        replace_unhealthy_instances: bool => "ReplaceUnhealthyInstances",
        /// One of `InstanceInterruptionBehavior`.
        instance_interruption_behavior: String => "InstanceInterruptionBehavior",
        load_balancers_config: LoadBalancersConfig => "LoadBalancersConfig",
        /// Only for the `lowestPrice` strategy.
        instance_pools_to_use_count: i32 => "InstancePoolsToUseCount",
        tag_specifications: [TagSpecification] => "TagSpecifications",
    }
}

ec2_shape! {
    /// Describes a Spot Fleet request.
    pub struct SpotFleetRequestConfig {
        /// One of `ActivityStatus`.
        activity_status: String => "ActivityStatus",
        create_time: Timestamp => "CreateTime",
        spot_fleet_request_config: SpotFleetRequestConfigData => "SpotFleetRequestConfig",
        spot_fleet_request_id: String => "SpotFleetRequestId",
        /// One of `BatchState`.
        spot_fleet_request_state: String => "SpotFleetRequestState",
        tags: [Tag] => "Tags",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::enums::{AllocationStrategy, BatchState, FleetType};

    #[test]
    fn test_build_launch_template_config() {
        let config = SpotFleetRequestConfigData::new()
            .with_allocation_strategy(AllocationStrategy::CapacityOptimized)
            .with_iam_fleet_role("arn:aws:iam::123456789012:role/aws-ec2-spot-fleet-tagging-role")
            .with_target_capacity(10)
            .with_type_value(FleetType::Request)
            .extend_launch_template_configs([LaunchTemplateConfig::new()
                .with_launch_template_specification(
                    FleetLaunchTemplateSpecification::new()
                        .with_launch_template_id("lt-0e8c754449b27161c")
                        .with_version("1"),
                )
                .extend_overrides([
                    LaunchTemplateOverrides::new().with_instance_type("c5.large").with_weighted_capacity(1.0),
                    LaunchTemplateOverrides::new().with_instance_type("c5.xlarge").with_weighted_capacity(2.0),
                ])]);

        assert_eq!(config.allocation_strategy(), Some("capacityOptimized"));
        let overrides = config.launch_template_configs().unwrap()[0].overrides().unwrap();
        assert_eq!(overrides.len(), 2);
        assert_eq!(overrides[1].weighted_capacity(), Some(2.0));
        assert!(config.to_string().contains(
            "Overrides: [{InstanceType: c5.large,WeightedCapacity: 1.0}, {InstanceType: c5.xlarge,WeightedCapacity: 2.0}]"
        ));
    }

    #[test]
    fn test_decode_spot_fleet_requests() {
        let payload = r#"{
            "SpotFleetRequestConfigs": [{
                "SpotFleetRequestId": "sfr-73fbd2ce-aa30-494c-8788-1cee4EXAMPLE",
                "SpotFleetRequestState": "cancelled_running",
                "CreateTime": "2019-04-01T18:21:26.000Z",
                "SpotFleetRequestConfig": {
                    "TargetCapacity": 20,
                    "FulfilledCapacity": 20.5,
                    "LaunchSpecifications": [{
                        "ImageId": "ami-6057e21a",
                        "InstanceType": "m3.medium",
                        "Monitoring": {"Enabled": true},
                        "WeightedCapacity": 2
                    }],
                    "LoadBalancersConfig": {
                        "TargetGroupsConfig": {"TargetGroups": [{"Arn": "arn:aws:elasticloadbalancing:tg/1"}]}
                    }
                }
            }],
            "NextToken": ""
        }"#;

        let result: DescribeSpotFleetRequestsResult = serde_json::from_str(payload).unwrap();
        assert_eq!(result.next_token(), Some(""));

        let request = &result.spot_fleet_request_configs().unwrap()[0];
        assert_eq!(request.spot_fleet_request_state(), Some(BatchState::CancelledRunning.as_ref()));

        let data = request.spot_fleet_request_config().unwrap();
        assert_eq!(data.fulfilled_capacity(), Some(20.5));

        let launch = &data.launch_specifications().unwrap()[0];
        assert_eq!(launch.weighted_capacity(), Some(2.0));
        assert_eq!(launch.monitoring().and_then(SpotFleetMonitoring::enabled), Some(true));
        assert_eq!(
            data.load_balancers_config()
                .and_then(LoadBalancersConfig::target_groups_config)
                .and_then(TargetGroupsConfig::target_groups)
                .map(<[TargetGroup]>::len),
            Some(1)
        );
    }
}
