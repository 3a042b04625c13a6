use ec2_model::domain::model::{BlockDeviceMapping, EbsBlockDevice, RunInstancesRequest};
use ec2_model::ShapeField;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn sdh_mapping() -> BlockDeviceMapping {
    BlockDeviceMapping::new()
        .with_device_name("/dev/sdh")
        .with_ebs(EbsBlockDevice::new().with_delete_on_termination(true))
}

#[test]
fn test_block_device_mapping_scenario() {
    let mapping = sdh_mapping();

    assert_eq!(mapping.device_name(), Some("/dev/sdh"));
    assert_eq!(
        mapping.ebs().and_then(EbsBlockDevice::delete_on_termination),
        Some(true)
    );

    let rendered = mapping.to_string();
    let nested = mapping.ebs().unwrap().to_string();
    assert!(rendered.contains("DeviceName: /dev/sdh"));
    assert!(rendered.contains(&nested));
    assert_eq!(nested, "{DeleteOnTermination: true}");

    let other = sdh_mapping();
    assert_eq!(mapping, other);
    assert_eq!(mapping.hash_code(), other.hash_code());
}

#[test]
fn test_std_hash_follows_hash_code() {
    let digest = |mapping: &BlockDeviceMapping| {
        let mut hasher = DefaultHasher::new();
        mapping.hash(&mut hasher);
        hasher.finish()
    };

    assert_eq!(digest(&sdh_mapping()), digest(&sdh_mapping()));
    assert_ne!(
        digest(&sdh_mapping()),
        digest(&sdh_mapping().with_virtual_name("ephemeral0"))
    );
}

#[test]
fn test_scenario_inside_run_instances_request() {
    let request = RunInstancesRequest::for_image("ami-0abcdef1234567890", 1, 1)
        .extend_block_device_mappings([sdh_mapping()])
        .extend_block_device_mappings([BlockDeviceMapping::new()
            .with_device_name("/dev/sdi")
            .with_no_device("")]);

    let mappings = request.block_device_mappings().unwrap();
    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0], sdh_mapping());
    assert_eq!(mappings[1].no_device(), Some(""));

    assert!(request.to_string().contains(
        "BlockDeviceMappings: [{DeviceName: /dev/sdh,Ebs: {DeleteOnTermination: true}}, \
         {DeviceName: /dev/sdi,NoDevice: }]"
    ));
}
