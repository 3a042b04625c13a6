use super::common::{Filter, Tag};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes the specified security groups or all of your security groups.
    pub struct DescribeSecurityGroupsRequest {
        /// For example `group-name`, `ip-permission.from-port` or `vpc-id`.
        filters: [Filter] => "Filters",
        group_ids: [String] => "GroupIds",
        /// [EC2-Classic and default VPC only] Filter by name otherwise.
        group_names: [String] => "GroupNames",
        dry_run: bool => "DryRun",
        next_token: String => "NextToken",
        /// 5 to 1000.
        max_results: i32 => "MaxResults",
    }
}

ec2_request!(
    DescribeSecurityGroupsRequest => "DescribeSecurityGroups",
    paginated by DescribeSecurityGroupsResult
);

ec2_shape! {
    pub struct DescribeSecurityGroupsResult {
        security_groups: [SecurityGroup] => "SecurityGroups",
        next_token: String => "NextToken",
    }
}

ec2_shape! {
    pub struct IpRange {
        cidr_ip: String => "CidrIp",
        description: String => "Description",
    }
}

ec2_shape! {
    pub struct Ipv6Range {
        cidr_ipv6: String => "CidrIpv6",
        description: String => "Description",
    }
}

ec2_shape! {
    pub struct PrefixListId {
        description: String => "Description",
        prefix_list_id: String => "PrefixListId",
    }
}

ec2_shape! {
    /// Describes a security group and AWS account ID pair.
    pub struct UserIdGroupPair {
        description: String => "Description",
        group_id: String => "GroupId",
        group_name: String => "GroupName",
        peering_status: String => "PeeringStatus",
        user_id: String => "UserId",
        vpc_id: String => "VpcId",
        vpc_peering_connection_id: String => "VpcPeeringConnectionId",
    }
}

ec2_shape! {
    /// Describes a set of permissions for a security group rule.
    pub struct IpPermission {
        /// Start of the port range, or ICMP type. `-1` means all.
        from_port: i32 => "FromPort",
        /// `tcp`, `udp`, `icmp`, `icmpv6`, a protocol number, or `-1` for all.
        ip_protocol: String => "IpProtocol",
        ip_ranges: [IpRange] => "IpRanges",
        ipv6_ranges: [Ipv6Range] => "Ipv6Ranges",
        prefix_list_ids: [PrefixListId] => "PrefixListIds",
        /// End of the port range, or ICMP code.
        to_port: i32 => "ToPort",
        user_id_group_pairs: [UserIdGroupPair] => "UserIdGroupPairs",
    }
}

ec2_shape! {
    /// Describes a security group.
    pub struct SecurityGroup {
        description: String => "Description",
        group_name: String => "GroupName",
        /// Inbound rules.
        ip_permissions: [IpPermission] => "IpPermissions",
        owner_id: String => "OwnerId",
        group_id: String => "GroupId",
        /// [VPC only] Outbound rules.
        ip_permissions_egress: [IpPermission] => "IpPermissionsEgress",
        tags: [Tag] => "Tags",
        vpc_id: String => "VpcId",
    }
}
