//! RunInstances.

use super::common::{
    BlockDeviceMapping, IamInstanceProfileSpecification, InstanceIpv6Address,
    InstanceNetworkInterfaceSpecification, Placement, RunInstancesMonitoringEnabled,
    TagSpecification,
};
use super::instances::Reservation;
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// The CPU options for the instance.
    pub struct CpuOptionsRequest {
        core_count: i32 => "CoreCount",
        /// Specify 1 to disable multithreading.
        threads_per_core: i32 => "ThreadsPerCore",
    }
}

ec2_shape! {
    /// Describes a target Capacity Reservation.
    pub struct CapacityReservationTarget {
        capacity_reservation_id: String => "CapacityReservationId",
    }
}

ec2_shape! {
    /// Describes an instance's Capacity Reservation targeting option. Use
    /// either the preference or the target, not both.
    pub struct CapacityReservationSpecification {
        /// One of `CapacityReservationPreference`.
        capacity_reservation_preference: String => "CapacityReservationPreference",
        capacity_reservation_target: CapacityReservationTarget => "CapacityReservationTarget",
    }
}

ec2_shape! {
    pub struct HibernationOptionsRequest {
        configured: bool => "Configured",
    }
}

ec2_shape! {
    pub struct LicenseConfigurationRequest {
        license_configuration_arn: String => "LicenseConfigurationArn",
    }
}

ec2_shape! {
    /// The metadata options for the instance.
    pub struct InstanceMetadataOptionsRequest {
        /// One of `HttpTokensState`. Default `optional`.
        http_tokens: String => "HttpTokens",
        /// 1 to 64. Default 1.
        http_put_response_hop_limit: i32 => "HttpPutResponseHopLimit",
        /// One of `InstanceMetadataEndpointState`. Default `enabled`.
        http_endpoint: String => "HttpEndpoint",
    }
}

ec2_shape! {
    /// A specification for an Elastic Graphics accelerator.
    pub struct ElasticGpuSpecification {
        type_value: String => "Type",
    }
}

ec2_shape! {
    /// Describes an elastic inference accelerator.
    pub struct ElasticInferenceAccelerator {
        /// For example `eia1.medium`.
        type_value: String => "Type",
        /// At least 1.
        count: i32 => "Count",
    }
}

ec2_shape! {
    /// The launch template to use. Identify it by ID or by name, not both.
    pub struct LaunchTemplateSpecification {
        launch_template_id: String => "LaunchTemplateId",
        launch_template_name: String => "LaunchTemplateName",
        /// A version number, `$Latest` or `$Default`.
        version: String => "Version",
    }
}

ec2_shape! {
    /// The options for Spot Instances.
    pub struct SpotMarketOptions {
        max_price: String => "MaxPrice",
        /// One of `SpotInstanceType`.
        spot_instance_type: String => "SpotInstanceType",
        /// Multiple of 60 (60, 120, 180, 240, 300, or 360).
        block_duration_minutes: i32 => "BlockDurationMinutes",
        valid_until: Timestamp => "ValidUntil",
        /// One of `InstanceInterruptionBehavior`.
        instance_interruption_behavior: String => "InstanceInterruptionBehavior",
    }
}

ec2_shape! {
    /// Describes the market (purchasing) option for the instances.
    pub struct InstanceMarketOptionsRequest {
        /// One of `MarketType`.
        market_type: String => "MarketType",
        spot_options: SpotMarketOptions => "SpotOptions",
    }
}

ec2_shape! {
    /// The credit option for CPU usage of a T2 or T3 instance.
    pub struct CreditSpecificationRequest {
        /// `standard` or `unlimited`.
        cpu_credits: String => "CpuCredits",
    }
}

ec2_shape! {
    /// Launches the specified number of instances using an AMI for which you
    /// have permissions.
    ///
    /// If you don't specify a subnet ID, a default subnet from the default VPC
    /// is chosen. Linux instances have access to the public key of the key pair
    /// at boot. `min_count`/`max_count` are checked by the service, not here.
    pub struct RunInstancesRequest {
        /// The block device mapping entries.
        block_device_mappings: [BlockDeviceMapping] => "BlockDeviceMappings",
        /// The ID of the AMI. Required unless the launch template names one.
        image_id: String => "ImageId",
        /// One of `InstanceType`. Default `m1.small`.
        instance_type: String => "InstanceType",
        /// Cannot be combined with `ipv6_addresses`.
        ipv6_address_count: i32 => "Ipv6AddressCount",
        ipv6_addresses: [InstanceIpv6Address] => "Ipv6Addresses",
        kernel_id: String => "KernelId",
        key_name: String => "KeyName",
        /// The maximum number of instances to launch. If more than EC2 can
        /// launch, the largest possible number above `min_count` is launched.
        max_count: i32 => "MaxCount",
        /// The minimum number of instances to launch. At least 1.
        min_count: i32 => "MinCount",
        monitoring: RunInstancesMonitoringEnabled => "Monitoring",
        placement: Placement => "Placement",
        ramdisk_id: String => "RamdiskId",
        security_group_ids: [String] => "SecurityGroupIds",
        /// [EC2-Classic, default VPC] The names of the security groups.
        security_groups: [String] => "SecurityGroups",
        subnet_id: String => "SubnetId",
        /// Base64-encoded user data. Limited to 16 KB.
        user_data: String => "UserData",
        /// Reserved.
        additional_info: String => "AdditionalInfo",
        /// Unique, case-sensitive identifier for idempotency. Up to 64 ASCII characters.
        client_token: String => "ClientToken",
        disable_api_termination: bool => "DisableApiTermination",
        dry_run: bool => "DryRun",
        ebs_optimized: bool => "EbsOptimized",
        iam_instance_profile: IamInstanceProfileSpecification => "IamInstanceProfile",
        /// One of `ShutdownBehavior`. Default `stop`.
        instance_initiated_shutdown_behavior: String => "InstanceInitiatedShutdownBehavior",
        network_interfaces: [InstanceNetworkInterfaceSpecification] => "NetworkInterfaces",
        /// [EC2-VPC] The primary IPv4 address.
        private_ip_address: String => "PrivateIpAddress",
        elastic_gpu_specification: [ElasticGpuSpecification] => "ElasticGpuSpecification",
        elastic_inference_accelerators: [ElasticInferenceAccelerator] => "ElasticInferenceAccelerators",
        tag_specifications: [TagSpecification] => "TagSpecifications",
        launch_template: LaunchTemplateSpecification => "LaunchTemplate",
        instance_market_options: InstanceMarketOptionsRequest => "InstanceMarketOptions",
        credit_specification: CreditSpecificationRequest => "CreditSpecification",
        cpu_options: CpuOptionsRequest => "CpuOptions",
        capacity_reservation_specification: CapacityReservationSpecification => "CapacityReservationSpecification",
        hibernation_options: HibernationOptionsRequest => "HibernationOptions",
        license_specifications: [LicenseConfigurationRequest] => "LicenseSpecifications",
        metadata_options: InstanceMetadataOptionsRequest => "MetadataOptions",
    }
}

impl RunInstancesRequest {
    pub fn for_image(image_id: impl Into<String>, min_count: i32, max_count: i32) -> Self {
        Self::new()
            .with_image_id(image_id)
            .with_min_count(min_count)
            .with_max_count(max_count)
    }
}

ec2_request!(RunInstancesRequest => "RunInstances");

ec2_shape! {
    pub struct RunInstancesResult {
        /// The reservation that was created.
        reservation: Reservation => "Reservation",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::ShapeField;
    use crate::domain::model::common::{EbsBlockDevice, Tag};
    use crate::domain::model::enums::{InstanceType, ResourceType, ShutdownBehavior};

    #[test]
    fn test_for_image() {
        let request = RunInstancesRequest::for_image("ami-12345678", 1, 3);
        assert_eq!(request.image_id(), Some("ami-12345678"));
        assert_eq!(request.min_count(), Some(1));
        assert_eq!(request.max_count(), Some(3));
        assert_eq!(request.instance_type(), None);
    }

    #[test]
    fn test_enum_and_raw_string_write_same_field() {
        let typed = RunInstancesRequest::new()
            .with_instance_type(InstanceType::T3Micro)
            .with_instance_initiated_shutdown_behavior(ShutdownBehavior::Terminate);
        let raw = RunInstancesRequest::new()
            .with_instance_type("t3.micro")
            .with_instance_initiated_shutdown_behavior("terminate");

        assert_eq!(typed, raw);
        assert_eq!(typed.hash_code(), raw.hash_code());
        assert_eq!(typed.instance_type(), Some("t3.micro"));
    }

    #[test]
    fn test_constraints_are_not_enforced() {
        let request = RunInstancesRequest::new()
            .with_min_count(0)
            .with_instance_type("not-a-real-type");

        assert_eq!(request.min_count(), Some(0));
        assert_eq!(request.instance_type(), Some("not-a-real-type"));
    }

    #[test]
    fn test_nested_lists() {
        let request = RunInstancesRequest::for_image("ami-1", 1, 1)
            .extend_block_device_mappings([BlockDeviceMapping::new()
                .with_device_name("/dev/sdh")
                .with_ebs(EbsBlockDevice::new().with_delete_on_termination(true))])
            .extend_tag_specifications([TagSpecification::new()
                .with_resource_type(ResourceType::Instance)
                .extend_tags([Tag::from_pair("Name", "worker")])])
            .extend_security_group_ids(["sg-1", "sg-2"]);

        let mapping = &request.block_device_mappings().unwrap()[0];
        assert_eq!(mapping.ebs().and_then(EbsBlockDevice::delete_on_termination), Some(true));
        assert_eq!(
            request.tag_specifications().unwrap()[0].resource_type(),
            Some("instance")
        );
        assert_eq!(request.security_group_ids().unwrap().len(), 2);
        assert!(request.to_string().contains("SecurityGroupIds: [sg-1, sg-2]"));
    }
}
