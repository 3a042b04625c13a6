use super::common::{Filter, Tag};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes one or more of your route tables.
    ///
    /// Each subnet in a VPC must be associated with a route table. Subnets
    /// without an explicit association use the VPC's main route table.
    pub struct DescribeRouteTablesRequest {
        /// For example `association.main`, `route.destination-cidr-block` or `vpc-id`.
        filters: [Filter] => "Filters",
        dry_run: bool => "DryRun",
        route_table_ids: [String] => "RouteTableIds",
        next_token: String => "NextToken",
        /// 5 to 100.
        max_results: i32 => "MaxResults",
    }
}

ec2_request!(
    DescribeRouteTablesRequest => "DescribeRouteTables",
    paginated by DescribeRouteTablesResult
);

ec2_shape! {
    pub struct DescribeRouteTablesResult {
        route_tables: [RouteTable] => "RouteTables",
        next_token: String => "NextToken",
    }
}

ec2_shape! {
    /// Describes a route in a route table.
    pub struct Route {
        destination_cidr_block: String => "DestinationCidrBlock",
        destination_ipv6_cidr_block: String => "DestinationIpv6CidrBlock",
        destination_prefix_list_id: String => "DestinationPrefixListId",
        egress_only_internet_gateway_id: String => "EgressOnlyInternetGatewayId",
        gateway_id: String => "GatewayId",
        instance_id: String => "InstanceId",
        instance_owner_id: String => "InstanceOwnerId",
        nat_gateway_id: String => "NatGatewayId",
        transit_gateway_id: String => "TransitGatewayId",
        local_gateway_id: String => "LocalGatewayId",
        network_interface_id: String => "NetworkInterfaceId",
        /// One of `RouteOrigin`.
        origin: String => "Origin",
        /// One of `RouteState`. `blackhole` when the target is gone.
        state: String => "State",
        vpc_peering_connection_id: String => "VpcPeeringConnectionId",
    }
}

ec2_shape! {
    pub struct RouteTableAssociationState {
        /// `associating`, `associated`, `disassociating`, `disassociated` or `failed`.
        state: String => "State",
        status_message: String => "StatusMessage",
    }
}

ec2_shape! {
    /// Describes an association between a route table and a subnet or gateway.
    pub struct RouteTableAssociation {
        /// Whether this is the main route table.
        main: bool => "Main",
        route_table_association_id: String => "RouteTableAssociationId",
        route_table_id: String => "RouteTableId",
        subnet_id: String => "SubnetId",
        gateway_id: String => "GatewayId",
        association_state: RouteTableAssociationState => "AssociationState",
    }
}

ec2_shape! {
    /// Describes a virtual private gateway propagating route.
    pub struct PropagatingVgw {
        gateway_id: String => "GatewayId",
    }
}

ec2_shape! {
    /// Describes a route table.
    pub struct RouteTable {
        associations: [RouteTableAssociation] => "Associations",
        propagating_vgws: [PropagatingVgw] => "PropagatingVgws",
        route_table_id: String => "RouteTableId",
        routes: [Route] => "Routes",
        tags: [Tag] => "Tags",
        vpc_id: String => "VpcId",
        owner_id: String => "OwnerId",
    }
}

impl RouteTable {
    pub fn is_main(&self) -> bool {
        self.associations()
            .unwrap_or_default()
            .iter()
            .any(|association| association.main() == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::enums::{RouteOrigin, RouteState};

    #[test]
    fn test_main_route_table() {
        let main = RouteTable::new().extend_associations([RouteTableAssociation::new()
            .with_main(true)
            .with_route_table_id("rtb-1")]);
        let subnet = RouteTable::new().extend_associations([RouteTableAssociation::new()
            .with_main(false)
            .with_subnet_id("subnet-1")]);

        assert!(main.is_main());
        assert!(!subnet.is_main());
        assert!(!RouteTable::new().is_main());
    }

    #[test]
    fn test_decode_routes() {
        let payload = r#"{
            "RouteTables": [{
                "RouteTableId": "rtb-22574640",
                "VpcId": "vpc-a01106c2",
                "Routes": [
                    {"DestinationCidrBlock": "10.0.0.0/16", "GatewayId": "local", "Origin": "CreateRouteTable", "State": "active"},
                    {"DestinationCidrBlock": "0.0.0.0/0", "NatGatewayId": "nat-1", "Origin": "CreateRoute", "State": "blackhole"}
                ],
                "PropagatingVgws": [{"GatewayId": "vgw-f211f09b"}]
            }]
        }"#;

        let result: DescribeRouteTablesResult = serde_json::from_str(payload).unwrap();
        let routes = result.route_tables().unwrap()[0].routes().unwrap();

        assert_eq!(routes[0].origin(), Some(RouteOrigin::CreateRouteTable.as_ref()));
        assert_eq!(routes[1].state(), Some(RouteState::Blackhole.as_ref()));
        assert_eq!(routes[1].gateway_id(), None);
        assert_eq!(
            routes[1].to_string(),
            "{DestinationCidrBlock: 0.0.0.0/0,NatGatewayId: nat-1,Origin: CreateRoute,State: blackhole}"
        );
    }
}
