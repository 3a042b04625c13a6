use super::common::{Filter, Tag, TagSpecification};
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Creates a new Capacity Reservation with the specified attributes.
    ///
    /// Capacity is reserved until cancelled or until `end_date` when
    /// `end_date_type` is `limited`.
    pub struct CreateCapacityReservationRequest {
        /// Up to 64 ASCII characters.
        client_token: String => "ClientToken",
        /// One of `InstanceType`.
        instance_type: String => "InstanceType",
        /// One of `CapacityReservationInstancePlatform`.
        instance_platform: String => "InstancePlatform",
        availability_zone: String => "AvailabilityZone",
        availability_zone_id: String => "AvailabilityZoneId",
        /// One of `CapacityReservationTenancy`. Default `default`.
        tenancy: String => "Tenancy",
        instance_count: i32 => "InstanceCount",
        ebs_optimized: bool => "EbsOptimized",
        /// Whether the instances use temporary block-level storage.
        ephemeral_storage: bool => "EphemeralStorage",
        /// Seconds are ignored. Must be omitted when `end_date_type` is `unlimited`.
        end_date: Timestamp => "EndDate",
        /// One of `EndDateType`.
        end_date_type: String => "EndDateType",
        /// One of `InstanceMatchCriteria`. Default `open`.
        instance_match_criteria: String => "InstanceMatchCriteria",
        tag_specifications: [TagSpecification] => "TagSpecifications",
        dry_run: bool => "DryRun",
    }
}

ec2_request!(CreateCapacityReservationRequest => "CreateCapacityReservation");

ec2_shape! {
    pub struct CreateCapacityReservationResult {
        capacity_reservation: CapacityReservation => "CapacityReservation",
    }
}

ec2_shape! {
    pub struct DescribeCapacityReservationsRequest {
        capacity_reservation_ids: [String] => "CapacityReservationIds",
        next_token: String => "NextToken",
        /// 1 to 1000.
        max_results: i32 => "MaxResults",
        filters: [Filter] => "Filters",
        dry_run: bool => "DryRun",
    }
}

ec2_request!(
    DescribeCapacityReservationsRequest => "DescribeCapacityReservations",
    paginated by DescribeCapacityReservationsResult
);

ec2_shape! {
    pub struct DescribeCapacityReservationsResult {
        next_token: String => "NextToken",
        capacity_reservations: [CapacityReservation] => "CapacityReservations",
    }
}

ec2_shape! {
    /// Describes a Capacity Reservation.
    pub struct CapacityReservation {
        capacity_reservation_id: String => "CapacityReservationId",
        owner_id: String => "OwnerId",
        capacity_reservation_arn: String => "CapacityReservationArn",
        availability_zone_id: String => "AvailabilityZoneId",
        instance_type: String => "InstanceType",
        /// One of `CapacityReservationInstancePlatform`.
        instance_platform: String => "InstancePlatform",
        availability_zone: String => "AvailabilityZone",
        /// One of `CapacityReservationTenancy`.
        tenancy: String => "Tenancy",
        total_instance_count: i32 => "TotalInstanceCount",
        /// Remaining capacity.
        available_instance_count: i32 => "AvailableInstanceCount",
        ebs_optimized: bool => "EbsOptimized",
        ephemeral_storage: bool => "EphemeralStorage",
        /// One of `CapacityReservationState`.
        state: String => "State",
        end_date: Timestamp => "EndDate",
        /// One of `EndDateType`.
        end_date_type: String => "EndDateType",
        /// One of `InstanceMatchCriteria`.
        instance_match_criteria: String => "InstanceMatchCriteria",
        create_date: Timestamp => "CreateDate",
        tags: [Tag] => "Tags",
    }
}
