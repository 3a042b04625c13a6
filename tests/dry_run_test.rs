use ec2_model::core::request::DRY_RUN_PARAMETER;
use ec2_model::domain::model::{
    CreateFlowLogsRequest, DescribeNetworkInterfacesRequest, Filter, RunInstancesRequest,
};
use ec2_model::{
    DryRunSupportedRequest, Ec2Request, Marshaller, ModelError, Result, WireRequest,
};

/// Flattens a handful of RunInstances fields into query parameters.
struct RunInstancesQueryMarshaller;

impl Marshaller<RunInstancesRequest> for RunInstancesQueryMarshaller {
    fn marshall(&self, request: &RunInstancesRequest) -> Result<WireRequest> {
        let mut wire = WireRequest::new(RunInstancesRequest::ACTION);
        if let Some(image_id) = request.image_id() {
            wire.add_parameter("ImageId", image_id);
        }
        if let Some(min_count) = request.min_count() {
            wire.add_parameter("MinCount", min_count.to_string());
        }
        if let Some(max_count) = request.max_count() {
            wire.add_parameter("MaxCount", max_count.to_string());
        }
        if let Some(dry_run) = request.dry_run() {
            wire.add_parameter(DRY_RUN_PARAMETER, dry_run.to_string());
        }
        for (index, group) in request.security_group_ids().unwrap_or_default().iter().enumerate() {
            wire.add_parameter(format!("SecurityGroupId.{}", index + 1), group);
        }
        Ok(wire)
    }
}

struct FailingMarshaller;

impl Marshaller<CreateFlowLogsRequest> for FailingMarshaller {
    fn marshall(&self, _request: &CreateFlowLogsRequest) -> Result<WireRequest> {
        Err(ModelError::MarshallingError {
            message: "ResourceIds is required".to_string(),
        })
    }
}

struct FiltersMarshaller;

impl Marshaller<DescribeNetworkInterfacesRequest> for FiltersMarshaller {
    fn marshall(&self, request: &DescribeNetworkInterfacesRequest) -> Result<WireRequest> {
        let mut wire = WireRequest::new(DescribeNetworkInterfacesRequest::ACTION);
        for (i, filter) in request.filters().unwrap_or_default().iter().enumerate() {
            wire.add_parameter(format!("Filter.{}.Name", i + 1), filter.name().unwrap_or_default());
            for (j, value) in filter.values().unwrap_or_default().iter().enumerate() {
                wire.add_parameter(format!("Filter.{}.Value.{}", i + 1, j + 1), value);
            }
        }
        Ok(wire)
    }
}

#[test]
fn test_dry_run_adds_flag() {
    let request = RunInstancesRequest::for_image("ami-12345678", 1, 2)
        .extend_security_group_ids(["sg-1"]);

    let wire = request.dry_run_request(&RunInstancesQueryMarshaller).unwrap();

    assert_eq!(wire.service_name(), "AmazonEC2");
    assert_eq!(wire.action(), "RunInstances");
    assert_eq!(wire.parameter("DryRun"), Some("true"));
    assert_eq!(wire.parameter("ImageId"), Some("ami-12345678"));
    assert_eq!(wire.parameter("SecurityGroupId.1"), Some("sg-1"));
}

#[test]
fn test_dry_run_overrides_explicit_false() {
    let request = RunInstancesRequest::for_image("ami-12345678", 1, 1).with_dry_run(false);

    let regular = RunInstancesQueryMarshaller.marshall(&request).unwrap();
    assert_eq!(regular.parameter(DRY_RUN_PARAMETER), Some("false"));

    let preview = request.dry_run_request(&RunInstancesQueryMarshaller).unwrap();
    assert_eq!(preview.parameter(DRY_RUN_PARAMETER), Some("true"));
    assert_eq!(preview.parameters().len(), regular.parameters().len());

    // The request itself is untouched
    assert_eq!(request.dry_run(), Some(false));
}

#[test]
fn test_dry_run_propagates_marshaller_errors() {
    let result = CreateFlowLogsRequest::new().dry_run_request(&FailingMarshaller);
    assert!(matches!(result, Err(ModelError::MarshallingError { .. })));
}

#[test]
fn test_dry_run_through_trait_object() {
    let marshaller: &dyn Marshaller<DescribeNetworkInterfacesRequest> = &FiltersMarshaller;
    let request = DescribeNetworkInterfacesRequest::new()
        .extend_filters([Filter::named("vpc-id", ["vpc-1", "vpc-2"])]);

    let wire = request.dry_run_request(marshaller).unwrap();
    assert_eq!(wire.action(), "DescribeNetworkInterfaces");
    assert_eq!(wire.parameter("Filter.1.Name"), Some("vpc-id"));
    assert_eq!(wire.parameter("Filter.1.Value.2"), Some("vpc-2"));
    assert_eq!(wire.parameter("DryRun"), Some("true"));
}
