//! DescribeInstances and the instance description it returns.

use super::common::{
    Filter, GroupIdentifier, IamInstanceProfile, InstanceIpv6Address, InstanceState,
    Monitoring, Placement, ProductCode, StateReason, Tag,
};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes the specified instances or all instances.
    ///
    /// Paginated through `max_results`/`next_token`; `max_results` cannot be
    /// combined with `instance_ids`.
    pub struct DescribeInstancesRequest {
        /// The filters, for example `instance-state-name`, `instance-type`,
        /// `tag:<key>`, `vpc-id`.
        filters: [Filter] => "Filters",
        /// The instance IDs. Default: describes all your instances.
        instance_ids: [String] => "InstanceIds",
        /// Checks permissions without making the request.
        dry_run: bool => "DryRun",
        /// Between 5 and 1000.
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

ec2_request!(DescribeInstancesRequest => "DescribeInstances", paginated by DescribeInstancesResult);

ec2_shape! {
    pub struct DescribeInstancesResult {
        /// Zero or more reservations.
        reservations: [Reservation] => "Reservations",
        /// The token to use to retrieve the next page of results. Absent when
        /// there are no more results.
        next_token: String => "NextToken",
    }
}

ec2_shape! {
    /// Describes a launch request for one or more instances.
    pub struct Reservation {
        /// [EC2-Classic only] The security groups.
        groups: [GroupIdentifier] => "Groups",
        instances: [Instance] => "Instances",
        owner_id: String => "OwnerId",
        /// The ID of the requester that launched the instances on your behalf
        /// (for example, AWS Management Console or Auto Scaling).
        requester_id: String => "RequesterId",
        reservation_id: String => "ReservationId",
    }
}

ec2_shape! {
    /// Describes a block device for an EBS volume attached to an instance.
    pub struct EbsInstanceBlockDevice {
        attach_time: Timestamp => "AttachTime",
        delete_on_termination: bool => "DeleteOnTermination",
        /// One of `AttachmentStatus`.
        status: String => "Status",
        volume_id: String => "VolumeId",
    }
}

ec2_shape! {
    /// Describes a block device mapping of an instance.
    pub struct InstanceBlockDeviceMapping {
        device_name: String => "DeviceName",
        ebs: EbsInstanceBlockDevice => "Ebs",
    }
}

ec2_shape! {
    /// The CPU options for the instance.
    pub struct CpuOptions {
        core_count: i32 => "CoreCount",
        threads_per_core: i32 => "ThreadsPerCore",
    }
}

ec2_shape! {
    pub struct CapacityReservationTargetResponse {
        capacity_reservation_id: String => "CapacityReservationId",
    }
}

ec2_shape! {
    /// Describes the instance's Capacity Reservation targeting preferences.
    pub struct CapacityReservationSpecificationResponse {
        /// One of `CapacityReservationPreference`.
        capacity_reservation_preference: String => "CapacityReservationPreference",
        capacity_reservation_target: CapacityReservationTargetResponse => "CapacityReservationTarget",
    }
}

ec2_shape! {
    /// Indicates whether your instance is configured for hibernation.
    pub struct HibernationOptions {
        configured: bool => "Configured",
    }
}

ec2_shape! {
    /// Describes a license configuration.
    pub struct LicenseConfiguration {
        license_configuration_arn: String => "LicenseConfigurationArn",
    }
}

ec2_shape! {
    /// The metadata options for the instance.
    pub struct InstanceMetadataOptionsResponse {
        /// One of `InstanceMetadataOptionsState`. `pending` until the options
        /// have been applied.
        state: String => "State",
        /// One of `HttpTokensState`.
        http_tokens: String => "HttpTokens",
        /// 1 to 64.
        http_put_response_hop_limit: i32 => "HttpPutResponseHopLimit",
        /// One of `InstanceMetadataEndpointState`.
        http_endpoint: String => "HttpEndpoint",
    }
}

ec2_shape! {
    /// Describes the association between an instance and an Elastic Graphics accelerator.
    pub struct ElasticGpuAssociation {
        elastic_gpu_id: String => "ElasticGpuId",
        elastic_gpu_association_id: String => "ElasticGpuAssociationId",
        elastic_gpu_association_state: String => "ElasticGpuAssociationState",
        elastic_gpu_association_time: String => "ElasticGpuAssociationTime",
    }
}

ec2_shape! {
    /// Describes the association between an instance and an elastic inference accelerator.
    pub struct ElasticInferenceAcceleratorAssociation {
        elastic_inference_accelerator_arn: String => "ElasticInferenceAcceleratorArn",
        elastic_inference_accelerator_association_id: String => "ElasticInferenceAcceleratorAssociationId",
        elastic_inference_accelerator_association_state: String => "ElasticInferenceAcceleratorAssociationState",
        elastic_inference_accelerator_association_time: Timestamp => "ElasticInferenceAcceleratorAssociationTime",
    }
}

ec2_shape! {
    /// Describes association information for an Elastic IP address (IPv4).
    pub struct InstanceNetworkInterfaceAssociation {
        ip_owner_id: String => "IpOwnerId",
        public_dns_name: String => "PublicDnsName",
        public_ip: String => "PublicIp",
    }
}

ec2_shape! {
    /// Describes a network interface attachment.
    pub struct InstanceNetworkInterfaceAttachment {
        attach_time: Timestamp => "AttachTime",
        attachment_id: String => "AttachmentId",
        delete_on_termination: bool => "DeleteOnTermination",
        device_index: i32 => "DeviceIndex",
        /// One of `AttachmentStatus`.
        status: String => "Status",
    }
}

ec2_shape! {
    /// Describes a private IPv4 address.
    pub struct InstancePrivateIpAddress {
        association: InstanceNetworkInterfaceAssociation => "Association",
        primary: bool => "Primary",
        private_dns_name: String => "PrivateDnsName",
        private_ip_address: String => "PrivateIpAddress",
    }
}

ec2_shape! {
    /// Describes a network interface.
    pub struct InstanceNetworkInterface {
        association: InstanceNetworkInterfaceAssociation => "Association",
        attachment: InstanceNetworkInterfaceAttachment => "Attachment",
        description: String => "Description",
        groups: [GroupIdentifier] => "Groups",
        ipv6_addresses: [InstanceIpv6Address] => "Ipv6Addresses",
        mac_address: String => "MacAddress",
        network_interface_id: String => "NetworkInterfaceId",
        owner_id: String => "OwnerId",
        private_dns_name: String => "PrivateDnsName",
        private_ip_address: String => "PrivateIpAddress",
        private_ip_addresses: [InstancePrivateIpAddress] => "PrivateIpAddresses",
        source_dest_check: bool => "SourceDestCheck",
        /// One of `NetworkInterfaceStatus`.
        status: String => "Status",
        subnet_id: String => "SubnetId",
        vpc_id: String => "VpcId",
        /// `interface` or `efa`.
        interface_type: String => "InterfaceType",
    }
}

ec2_shape! {
    /// Describes an instance.
    pub struct Instance {
        /// The AMI launch index, which can be used to find this instance in the launch group.
        ami_launch_index: i32 => "AmiLaunchIndex",
        image_id: String => "ImageId",
        instance_id: String => "InstanceId",
        /// One of `InstanceType`.
        instance_type: String => "InstanceType",
        kernel_id: String => "KernelId",
        /// The name of the key pair, if this instance was launched with an associated key pair.
        key_name: String => "KeyName",
        /// The time the instance was launched.
        launch_time: Timestamp => "LaunchTime",
        monitoring: Monitoring => "Monitoring",
        placement: Placement => "Placement",
        /// `Windows` for Windows instances, otherwise absent. One of `PlatformValues`.
        platform: String => "Platform",
        /// (IPv4 only) The private DNS hostname. Empty until the instance is running.
        private_dns_name: String => "PrivateDnsName",
        private_ip_address: String => "PrivateIpAddress",
        product_codes: [ProductCode] => "ProductCodes",
        /// (IPv4 only) The public DNS name. Empty until the instance is running.
        public_dns_name: String => "PublicDnsName",
        public_ip_address: String => "PublicIpAddress",
        ramdisk_id: String => "RamdiskId",
        state: InstanceState => "State",
        /// The reason for the most recent state transition. Might be an empty string.
        state_transition_reason: String => "StateTransitionReason",
        subnet_id: String => "SubnetId",
        vpc_id: String => "VpcId",
        /// One of `ArchitectureValues`.
        architecture: String => "Architecture",
        block_device_mappings: [InstanceBlockDeviceMapping] => "BlockDeviceMappings",
        client_token: String => "ClientToken",
        ebs_optimized: bool => "EbsOptimized",
        ena_support: bool => "EnaSupport",
        /// One of `HypervisorType`.
        hypervisor: String => "Hypervisor",
        iam_instance_profile: IamInstanceProfile => "IamInstanceProfile",
        /// Whether this is a Spot Instance or a Scheduled Instance. One of `InstanceLifecycleType`.
        instance_lifecycle: String => "InstanceLifecycle",
        elastic_gpu_associations: [ElasticGpuAssociation] => "ElasticGpuAssociations",
        elastic_inference_accelerator_associations: [ElasticInferenceAcceleratorAssociation] => "ElasticInferenceAcceleratorAssociations",
        /// [EC2-VPC] The network interfaces for the instance.
        network_interfaces: [InstanceNetworkInterface] => "NetworkInterfaces",
        outpost_arn: String => "OutpostArn",
        root_device_name: String => "RootDeviceName",
        /// One of `DeviceType`.
        root_device_type: String => "RootDeviceType",
        security_groups: [GroupIdentifier] => "SecurityGroups",
        /// Whether source/destination checking is enabled. Must be `false` for a NAT instance.
        source_dest_check: bool => "SourceDestCheck",
        spot_instance_request_id: String => "SpotInstanceRequestId",
        sriov_net_support: String => "SriovNetSupport",
        state_reason: StateReason => "StateReason",
        tags: [Tag] => "Tags",
        /// One of `VirtualizationType`.
        virtualization_type: String => "VirtualizationType",
        cpu_options: CpuOptions => "CpuOptions",
        capacity_reservation_id: String => "CapacityReservationId",
        capacity_reservation_specification: CapacityReservationSpecificationResponse => "CapacityReservationSpecification",
        hibernation_options: HibernationOptions => "HibernationOptions",
        licenses: [LicenseConfiguration] => "Licenses",
        metadata_options: InstanceMetadataOptionsResponse => "MetadataOptions",
    }
}

impl Instance {
    /// Value of the tag with the given key, if present.
    pub fn tag_value(&self, key: &str) -> Option<&str> {
        self.tags()?
            .iter()
            .find(|tag| tag.key() == Some(key))
            .and_then(Tag::value)
    }
}
