use super::common::{Tag, TagSpecification};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Creates an EBS volume that can be attached to an instance in the same
    /// Availability Zone.
    pub struct CreateVolumeRequest {
        availability_zone: String => "AvailabilityZone",
        /// Volumes created from encrypted snapshots are always encrypted.
        encrypted: bool => "Encrypted",
        /// Required for `io1`. 100 to 64000 IOPS.
        iops: i32 => "Iops",
        kms_key_id: String => "KmsKeyId",
        outpost_arn: String => "OutpostArn",
        /// GiB. Required unless creating from a snapshot.
        size: i32 => "Size",
        snapshot_id: String => "SnapshotId",
        /// One of `VolumeType`. Default `gp2`.
        volume_type: String => "VolumeType",
        dry_run: bool => "DryRun",
        tag_specifications: [TagSpecification] => "TagSpecifications",
        /// Only for Provisioned IOPS SSD volumes.
        multi_attach_enabled: bool => "MultiAttachEnabled",
    }
}

ec2_request!(CreateVolumeRequest => "CreateVolume");

ec2_shape! {
    pub struct CreateVolumeResult {
        volume: Volume => "Volume",
    }
}

ec2_shape! {
    /// Describes volume attachment details.
    pub struct VolumeAttachment {
        attach_time: Timestamp => "AttachTime",
        /// For example `/dev/sdh`.
        device: String => "Device",
        instance_id: String => "InstanceId",
        /// One of `VolumeAttachmentState`: `attaching`, `attached`, `detaching`, `detached` or `busy`.
        state: String => "State",
        volume_id: String => "VolumeId",
        delete_on_termination: bool => "DeleteOnTermination",
    }
}

ec2_shape! {
    /// Describes a volume.
    pub struct Volume {
        attachments: [VolumeAttachment] => "Attachments",
        availability_zone: String => "AvailabilityZone",
        create_time: Timestamp => "CreateTime",
        encrypted: bool => "Encrypted",
        kms_key_id: String => "KmsKeyId",
        outpost_arn: String => "OutpostArn",
        size: i32 => "Size",
        snapshot_id: String => "SnapshotId",
        /// `creating`, `available`, `in-use`, `deleting`, `deleted` or `error`.
        state: String => "State",
        volume_id: String => "VolumeId",
        iops: i32 => "Iops",
        tags: [Tag] => "Tags",
        volume_type: String => "VolumeType",
        fast_restored: bool => "FastRestored",
        multi_attach_enabled: bool => "MultiAttachEnabled",
    }
}
