use super::common::{BlockDeviceMapping, Filter, ProductCode, StateReason, Tag};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes the specified images (AMIs, AKIs, and ARIs) available to you.
    pub struct DescribeImagesRequest {
        /// Users with explicit launch permissions: AWS account IDs, `self`, or `all`.
        executable_users: [String] => "ExecutableUsers",
        filters: [Filter] => "Filters",
        image_ids: [String] => "ImageIds",
        /// Account IDs, `self`, `amazon`, or `aws-marketplace`.
        owners: [String] => "Owners",
        dry_run: bool => "DryRun",
    }
}

ec2_request!(DescribeImagesRequest => "DescribeImages");

ec2_shape! {
    pub struct DescribeImagesResult {
        images: [Image] => "Images",
    }
}

ec2_shape! {
    /// Describes an image.
    pub struct Image {
        /// One of `ArchitectureValues`.
        architecture: String => "Architecture",
        /// The date and time the image was created, as sent by the service.
        creation_date: String => "CreationDate",
        image_id: String => "ImageId",
        image_location: String => "ImageLocation",
        /// One of `ImageTypeValues`.
        image_type: String => "ImageType",
        /// Whether the image has public launch permissions.
        public_value: bool => "Public",
        kernel_id: String => "KernelId",
        owner_id: String => "OwnerId",
        /// One of `PlatformValues`.
        platform: String => "Platform",
        platform_details: String => "PlatformDetails",
        usage_operation: String => "UsageOperation",
        product_codes: [ProductCode] => "ProductCodes",
        ramdisk_id: String => "RamdiskId",
        /// One of `ImageState`. `available` once the image can be launched.
        state: String => "State",
        block_device_mappings: [BlockDeviceMapping] => "BlockDeviceMappings",
        description: String => "Description",
        ena_support: bool => "EnaSupport",
        /// One of `HypervisorType`.
        hypervisor: String => "Hypervisor",
        /// `amazon`, `aws-marketplace`, or the account alias.
        image_owner_alias: String => "ImageOwnerAlias",
        name: String => "Name",
        root_device_name: String => "RootDeviceName",
        /// One of `DeviceType`.
        root_device_type: String => "RootDeviceType",
        sriov_net_support: String => "SriovNetSupport",
        state_reason: StateReason => "StateReason",
        tags: [Tag] => "Tags",
        /// One of `VirtualizationType`.
        virtualization_type: String => "VirtualizationType",
    }
}
