//! Shapes shared by several operations.

use crate::ec2_shape;

ec2_shape! {
    /// Describes a tag.
    pub struct Tag {
        /// The key of the tag. Up to 127 Unicode characters, may not begin with `aws:`.
        key: String => "Key",
        /// The value of the tag. Up to 255 Unicode characters.
        value: String => "Value",
    }
}

impl Tag {
    pub fn from_pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}

ec2_shape! {
    /// The tags to apply to a resource when the resource is being created.
    pub struct TagSpecification {
        /// The type of resource to tag. One of `ResourceType`.
        resource_type: String => "ResourceType",
        tags: [Tag] => "Tags",
    }
}

ec2_shape! {
    /// A filter name and value pair used to return a more specific list of
    /// results from a describe operation. Filter names and values are case-sensitive.
    pub struct Filter {
        name: String => "Name",
        /// The filter values. Values are combined with OR.
        values: [String] => "Values",
    }
}

impl Filter {
    pub fn named<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new().with_name(name).extend_values(values)
    }
}

ec2_shape! {
    /// Describes a product code.
    pub struct ProductCode {
        product_code_id: String => "ProductCodeId",
        /// One of `ProductCodeValues`.
        product_code_type: String => "ProductCodeType",
    }
}

ec2_shape! {
    /// Describes a state change.
    pub struct StateReason {
        code: String => "Code",
        message: String => "Message",
    }
}

ec2_shape! {
    /// Describes a security group.
    pub struct GroupIdentifier {
        group_name: String => "GroupName",
        group_id: String => "GroupId",
    }
}

ec2_shape! {
    pub struct IamInstanceProfile {
        arn: String => "Arn",
        id: String => "Id",
    }
}

ec2_shape! {
    /// Describes an IAM instance profile.
    pub struct IamInstanceProfileSpecification {
        arn: String => "Arn",
        name: String => "Name",
    }
}

ec2_shape! {
    /// Describes the placement of an instance.
    pub struct Placement {
        availability_zone: String => "AvailabilityZone",
        /// The affinity setting for the instance on the Dedicated Host.
        affinity: String => "Affinity",
        group_name: String => "GroupName",
        /// Only valid when the placement group strategy is `partition`.
        partition_number: i32 => "PartitionNumber",
        host_id: String => "HostId",
        /// One of `Tenancy`. `host` is not supported for the ImportInstance command.
        tenancy: String => "Tenancy",
        spread_domain: String => "SpreadDomain",
        host_resource_group_arn: String => "HostResourceGroupArn",
    }
}

ec2_shape! {
    /// Describes Spot Instance placement.
    pub struct SpotPlacement {
        availability_zone: String => "AvailabilityZone",
        group_name: String => "GroupName",
        /// One of `Tenancy`.
        tenancy: String => "Tenancy",
    }
}

ec2_shape! {
    /// Describes the monitoring of an instance.
    pub struct Monitoring {
        /// One of `MonitoringState`.
        state: String => "State",
    }
}

ec2_shape! {
    /// Describes the monitoring of an instance.
    pub struct RunInstancesMonitoringEnabled {
        /// Whether detailed monitoring is enabled. Otherwise, basic monitoring is enabled.
        enabled: bool => "Enabled",
    }
}

ec2_shape! {
    /// Describes the current state of an instance.
    pub struct InstanceState {
        /// The state of the instance as a 16-bit unsigned integer. The high byte
        /// is opaque to callers; the low byte encodes the state (0 pending,
        /// 16 running, 32 shutting-down, 48 terminated, 64 stopping, 80 stopped).
        code: i32 => "Code",
        /// One of `InstanceStateName`.
        name: String => "Name",
    }
}

ec2_shape! {
    /// Describes a block device for an EBS volume.
    pub struct EbsBlockDevice {
        delete_on_termination: bool => "DeleteOnTermination",
        /// Required for `io1` volumes, not used with `gp2`, `st1`, `sc1` or `standard`.
        iops: i32 => "Iops",
        snapshot_id: String => "SnapshotId",
        /// Volume size in GiB.
        volume_size: i32 => "VolumeSize",
        /// One of `VolumeType`.
        volume_type: String => "VolumeType",
        kms_key_id: String => "KmsKeyId",
        encrypted: bool => "Encrypted",
    }
}

ec2_shape! {
    /// Describes a block device mapping.
    pub struct BlockDeviceMapping {
        /// The device name (for example, `/dev/sdh` or `xvdh`).
        device_name: String => "DeviceName",
        /// The virtual device name (`ephemeral`N).
        virtual_name: String => "VirtualName",
        /// Parameters used to set up EBS volumes automatically when the instance is launched.
        ebs: EbsBlockDevice => "Ebs",
        /// Suppresses the specified device included in the block device mapping of the AMI.
        no_device: String => "NoDevice",
    }
}

ec2_shape! {
    /// Describes an IPv6 address.
    pub struct InstanceIpv6Address {
        ipv6_address: String => "Ipv6Address",
    }
}

ec2_shape! {
    /// Describes a secondary private IPv4 address for a network interface.
    pub struct PrivateIpAddressSpecification {
        primary: bool => "Primary",
        private_ip_address: String => "PrivateIpAddress",
    }
}

ec2_shape! {
    /// Describes a network interface to attach at launch.
    pub struct InstanceNetworkInterfaceSpecification {
        associate_public_ip_address: bool => "AssociatePublicIpAddress",
        delete_on_termination: bool => "DeleteOnTermination",
        description: String => "Description",
        /// The position of the network interface in the attachment order.
        device_index: i32 => "DeviceIndex",
        /// The IDs of the security groups for the network interface.
        groups: [String] => "Groups",
        ipv6_address_count: i32 => "Ipv6AddressCount",
        ipv6_addresses: [InstanceIpv6Address] => "Ipv6Addresses",
        network_interface_id: String => "NetworkInterfaceId",
        private_ip_address: String => "PrivateIpAddress",
        private_ip_addresses: [PrivateIpAddressSpecification] => "PrivateIpAddresses",
        secondary_private_ip_address_count: i32 => "SecondaryPrivateIpAddressCount",
        subnet_id: String => "SubnetId",
        /// `efa` for an Elastic Fabric Adapter, otherwise `interface`.
        interface_type: String => "InterfaceType",
    }
}

ec2_shape! {
    pub struct UnsuccessfulItemError {
        code: String => "Code",
        message: String => "Message",
    }
}

ec2_shape! {
    /// Information about items that were not successfully processed in a batch call.
    pub struct UnsuccessfulItem {
        error: UnsuccessfulItemError => "Error",
        resource_id: String => "ResourceId",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::ShapeField;

    #[test]
    fn test_tag_accessors() {
        let mut tag = Tag::new();
        assert_eq!(tag.key(), None);

        tag.set_key(Some("Name".to_string()));
        tag.set_value(Some("web-1".to_string()));
        assert_eq!(tag.key(), Some("Name"));
        assert_eq!(tag.value(), Some("web-1"));

        tag.set_value(None);
        assert_eq!(tag.value(), None);
        assert_eq!(tag, Tag::new().with_key("Name"));
    }

    #[test]
    fn test_tag_display_and_hash() {
        let tag = Tag::from_pair("Name", "web-1");
        assert_eq!(tag.to_string(), "{Key: Name,Value: web-1}");

        let expected = 31 * (31 + "Name".to_string().hash_code()) + "web-1".to_string().hash_code();
        assert_eq!(tag.hash_code(), expected);

        assert_eq!(Tag::new().to_string(), "{}");
        assert_eq!(Tag::new().hash_code(), 961);
        assert_eq!(Tag::new().with_value("x").to_string(), "{Value: x}");
    }

    #[test]
    fn test_filter_named() {
        let filter = Filter::named("instance-state-name", ["running", "stopped"]);
        assert_eq!(filter.name(), Some("instance-state-name"));
        assert_eq!(
            filter.values().unwrap(),
            &["running".to_string(), "stopped".to_string()]
        );
        assert_eq!(
            filter.to_string(),
            "{Name: instance-state-name,Values: [running, stopped]}"
        );
    }

    #[test]
    fn test_unset_and_empty_lists_differ() {
        let unset = Filter::new().with_name("vpc-id");
        let empty = Filter::new().with_name("vpc-id").with_values(Vec::new());

        assert_ne!(unset, empty);
        assert_eq!(unset.values(), None);
        assert_eq!(empty.values(), Some(&[][..]));
        assert_eq!(empty.to_string(), "{Name: vpc-id,Values: []}");
    }

    #[test]
    fn test_nested_shape_display() {
        let mapping = BlockDeviceMapping::new()
            .with_device_name("/dev/xvda")
            .with_ebs(EbsBlockDevice::new().with_volume_size(8).with_encrypted(true));

        assert_eq!(
            mapping.to_string(),
            "{DeviceName: /dev/xvda,Ebs: {VolumeSize: 8,Encrypted: true}}"
        );
    }
}
