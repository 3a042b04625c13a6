use super::common::{
    BlockDeviceMapping, Filter, GroupIdentifier, IamInstanceProfileSpecification,
    InstanceNetworkInterfaceSpecification, RunInstancesMonitoringEnabled, SpotPlacement, Tag,
};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes the specified Spot Instance requests.
    pub struct DescribeSpotInstanceRequestsRequest {
        /// For example `state`, `status-code` or `launch.instance-type`.
        filters: [Filter] => "Filters",
        dry_run: bool => "DryRun",
        spot_instance_request_ids: [String] => "SpotInstanceRequestIds",
        next_token: String => "NextToken",
        /// 5 to 1000.
        max_results: i32 => "MaxResults",
    }
}

ec2_request!(
    DescribeSpotInstanceRequestsRequest => "DescribeSpotInstanceRequests",
    paginated by DescribeSpotInstanceRequestsResult
);

ec2_shape! {
    pub struct DescribeSpotInstanceRequestsResult {
        spot_instance_requests: [SpotInstanceRequest] => "SpotInstanceRequests",
        next_token: String => "NextToken",
    }
}

ec2_shape! {
    /// Describes the launch specification for an instance.
    pub struct LaunchSpecification {
        /// Base64-encoded.
        user_data: String => "UserData",
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
        network_interfaces: [InstanceNetworkInterfaceSpecification] => "NetworkInterfaces",
        placement: SpotPlacement => "Placement",
        ramdisk_id: String => "RamdiskId",
        subnet_id: String => "SubnetId",
        monitoring: RunInstancesMonitoringEnabled => "Monitoring",
    }
}

ec2_shape! {
    /// Describes a Spot Instance state change.
    pub struct SpotInstanceStateFault {
        code: String => "Code",
        message: String => "Message",
    }
}

ec2_shape! {
    /// Describes the status of a Spot Instance request.
    pub struct SpotInstanceStatus {
        /// For example `fulfilled` or `price-too-low`.
        code: String => "Code",
        message: String => "Message",
        update_time: Timestamp => "UpdateTime",
    }
}

ec2_shape! {
    /// Describes a Spot Instance request.
    pub struct SpotInstanceRequest {
        /// Only set for Spot blocks.
        actual_block_hourly_price: String => "ActualBlockHourlyPrice",
        availability_zone_group: String => "AvailabilityZoneGroup",
        block_duration_minutes: i32 => "BlockDurationMinutes",
        create_time: Timestamp => "CreateTime",
        fault: SpotInstanceStateFault => "Fault",
        instance_id: String => "InstanceId",
        launch_group: String => "LaunchGroup",
        launch_specification: LaunchSpecification => "LaunchSpecification",
        launched_availability_zone: String => "LaunchedAvailabilityZone",
        /// One of `RIProductDescription`.
        product_description: String => "ProductDescription",
        spot_instance_request_id: String => "SpotInstanceRequestId",
        /// The maximum price per hour you are willing to pay.
        spot_price: String => "SpotPrice",
        /// One of `SpotInstanceState`.
        state: String => "State",
        status: SpotInstanceStatus => "Status",
        tags: [Tag] => "Tags",
        /// One of `SpotInstanceType`.
        type_value: String => "Type",
        valid_from: Timestamp => "ValidFrom",
        valid_until: Timestamp => "ValidUntil",
        /// One of `InstanceInterruptionBehavior`.
        instance_interruption_behavior: String => "InstanceInterruptionBehavior",
    }
}
