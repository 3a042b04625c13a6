use super::common::{Filter, GroupIdentifier, Tag};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes one or more of your network interfaces.
    pub struct DescribeNetworkInterfacesRequest {
        /// For example `attachment.instance-id`, `status` or `vpc-id`.
        filters: [Filter] => "Filters",
        dry_run: bool => "DryRun",
        /// Defaults to all network interfaces.
        network_interface_ids: [String] => "NetworkInterfaceIds",
        next_token: String => "NextToken",
        /// 5 to 1000. Cannot be combined with `network_interface_ids`.
        max_results: i32 => "MaxResults",
    }
}

ec2_request!(
    DescribeNetworkInterfacesRequest => "DescribeNetworkInterfaces",
    paginated by DescribeNetworkInterfacesResult
);

ec2_shape! {
    pub struct DescribeNetworkInterfacesResult {
        network_interfaces: [NetworkInterface] => "NetworkInterfaces",
        next_token: String => "NextToken",
    }
}

ec2_shape! {
    /// Describes association information for an Elastic IP address (IPv4 only).
    pub struct NetworkInterfaceAssociation {
        allocation_id: String => "AllocationId",
        association_id: String => "AssociationId",
        ip_owner_id: String => "IpOwnerId",
        public_dns_name: String => "PublicDnsName",
        public_ip: String => "PublicIp",
    }
}

ec2_shape! {
    /// Describes a network interface attachment.
    pub struct NetworkInterfaceAttachment {
        attach_time: Timestamp => "AttachTime",
        attachment_id: String => "AttachmentId",
        delete_on_termination: bool => "DeleteOnTermination",
        device_index: i32 => "DeviceIndex",
        instance_id: String => "InstanceId",
        instance_owner_id: String => "InstanceOwnerId",
        /// One of `AttachmentStatus`.
        status: String => "Status",
    }
}

ec2_shape! {
    pub struct NetworkInterfaceIpv6Address {
        ipv6_address: String => "Ipv6Address",
    }
}

ec2_shape! {
    /// Describes the private IPv4 address of a network interface.
    pub struct NetworkInterfacePrivateIpAddress {
        association: NetworkInterfaceAssociation => "Association",
        primary: bool => "Primary",
        private_dns_name: String => "PrivateDnsName",
        private_ip_address: String => "PrivateIpAddress",
    }
}

ec2_shape! {
    /// Describes a network interface.
    pub struct NetworkInterface {
        association: NetworkInterfaceAssociation => "Association",
        attachment: NetworkInterfaceAttachment => "Attachment",
        availability_zone: String => "AvailabilityZone",
        description: String => "Description",
        groups: [GroupIdentifier] => "Groups",
        /// One of `NetworkInterfaceType`.
        interface_type: String => "InterfaceType",
        ipv6_addresses: [NetworkInterfaceIpv6Address] => "Ipv6Addresses",
        mac_address: String => "MacAddress",
        network_interface_id: String => "NetworkInterfaceId",
        outpost_arn: String => "OutpostArn",
        owner_id: String => "OwnerId",
        private_dns_name: String => "PrivateDnsName",
        private_ip_address: String => "PrivateIpAddress",
        private_ip_addresses: [NetworkInterfacePrivateIpAddress] => "PrivateIpAddresses",
        /// The alias or account ID of the principal that created the interface.
        requester_id: String => "RequesterId",
        /// Whether the interface is being managed by AWS.
        requester_managed: bool => "RequesterManaged",
        source_dest_check: bool => "SourceDestCheck",
        /// One of `NetworkInterfaceStatus`.
        status: String => "Status",
        subnet_id: String => "SubnetId",
        tag_set: [Tag] => "TagSet",
        vpc_id: String => "VpcId",
    }
}

impl NetworkInterface {
    /// The primary private IPv4 address entry, if the service reported one.
    pub fn primary_private_ip_address(&self) -> Option<&NetworkInterfacePrivateIpAddress> {
        self.private_ip_addresses()?
            .iter()
            .find(|address| address.primary() == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::request::{PaginatedRequest, PaginatedResult};
    use crate::domain::model::enums::{NetworkInterfaceStatus, NetworkInterfaceType};

    #[test]
    fn test_primary_private_ip_address() {
        let interface = NetworkInterface::new()
            .with_network_interface_id("eni-1")
            .with_status(NetworkInterfaceStatus::InUse)
            .with_interface_type(NetworkInterfaceType::Interface)
            .extend_private_ip_addresses([
                NetworkInterfacePrivateIpAddress::new()
                    .with_private_ip_address("10.0.1.18")
                    .with_primary(false),
                NetworkInterfacePrivateIpAddress::new()
                    .with_private_ip_address("10.0.1.17")
                    .with_primary(true),
            ]);

        assert_eq!(interface.status(), Some("in-use"));
        assert_eq!(
            interface
                .primary_private_ip_address()
                .and_then(NetworkInterfacePrivateIpAddress::private_ip_address),
            Some("10.0.1.17")
        );
        assert!(NetworkInterface::new().primary_private_ip_address().is_none());
    }

    #[test]
    fn test_pages_until_token_runs_out() {
        let request = DescribeNetworkInterfacesRequest::new()
            .extend_filters([Filter::named("vpc-id", ["vpc-a01106c2"])])
            .with_max_results(5);

        let pages = [
            DescribeNetworkInterfacesResult::new().with_next_token("p2"),
            DescribeNetworkInterfacesResult::new().with_next_token("p3"),
            DescribeNetworkInterfacesResult::new(),
        ];

        let mut current = request.clone();
        let mut tokens = Vec::new();
        for page in &pages {
            match current.next_page_request(page) {
                Some(next) => {
                    tokens.push(next.next_token().unwrap().to_string());
                    current = next;
                }
                None => assert!(!page.has_more_results()),
            }
        }

        assert_eq!(tokens, vec!["p2", "p3"]);
        assert_eq!(current.filters(), request.filters());
    }
}
