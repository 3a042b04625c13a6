use super::common::{TagSpecification, UnsuccessfulItem};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Creates one or more flow logs to capture information about IP traffic
    /// for a specific network interface, subnet, or VPC.
    pub struct CreateFlowLogsRequest {
        dry_run: bool => "DryRun",
        client_token: String => "ClientToken",
        /// Required for CloudWatch Logs destinations. Not used for S3.
        deliver_logs_permission_arn: String => "DeliverLogsPermissionArn",
        /// Either this or `log_destination`, not both.
        log_group_name: String => "LogGroupName",
        resource_ids: [String] => "ResourceIds",
        /// One of `FlowLogsResourceType`.
        resource_type: String => "ResourceType",
        /// One of `TrafficType`.
        traffic_type: String => "TrafficType",
        /// One of `LogDestinationType`. Default `cloud-watch-logs`.
        log_destination_type: String => "LogDestinationType",
        /// A CloudWatch Logs log group ARN or an S3 bucket ARN.
        log_destination: String => "LogDestination",
        /// Space-separated `${field}` tokens.
        log_format: String => "LogFormat",
        tag_specifications: [TagSpecification] => "TagSpecifications",
        /// 60 or 600 seconds.
        max_aggregation_interval: i32 => "MaxAggregationInterval",
    }
}

ec2_request!(CreateFlowLogsRequest => "CreateFlowLogs");

ec2_shape! {
    pub struct CreateFlowLogsResult {
        client_token: String => "ClientToken",
        flow_log_ids: [String] => "FlowLogIds",
        /// The flow logs that could not be created.
        unsuccessful: [UnsuccessfulItem] => "Unsuccessful",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::enums::{FlowLogsResourceType, LogDestinationType, TrafficType};

    #[test]
    fn test_log_format_is_kept_verbatim() {
        let request = CreateFlowLogsRequest::new()
            .extend_resource_ids(["vpc-1a2b3c4d"])
            .with_resource_type(FlowLogsResourceType::Vpc)
            .with_traffic_type(TrafficType::All)
            .with_log_destination_type(LogDestinationType::S3)
            .with_log_destination("arn:aws:s3:::my-bucket/flow")
            .with_log_format("${version} ${srcaddr} ${dstaddr}");

        assert_eq!(request.resource_type(), Some("VPC"));
        assert_eq!(request.traffic_type(), Some("ALL"));
        assert_eq!(request.log_destination_type(), Some("s3"));
        assert_eq!(request.log_format(), Some("${version} ${srcaddr} ${dstaddr}"));
    }

    #[test]
    fn test_unsuccessful_items() {
        let payload = r#"{
            "FlowLogIds": [],
            "Unsuccessful": [{
                "Error": {"Code": "InvalidVpcId.NotFound", "Message": "not found"},
                "ResourceId": "vpc-1a2b3c4d"
            }]
        }"#;

        let result: CreateFlowLogsResult = serde_json::from_str(payload).unwrap();
        assert_eq!(result.flow_log_ids(), Some(&[][..]));
        assert_eq!(result.client_token(), None);

        let item = &result.unsuccessful().unwrap()[0];
        assert_eq!(item.resource_id(), Some("vpc-1a2b3c4d"));
        assert_eq!(item.error().and_then(|e| e.code()), Some("InvalidVpcId.NotFound"));
        assert_eq!(
            result.to_string(),
            "{FlowLogIds: [],Unsuccessful: [{Error: {Code: InvalidVpcId.NotFound,Message: not found},ResourceId: vpc-1a2b3c4d}]}"
        );
    }
}
