use super::common::Filter;
use crate::{ec2_request, ec2_shape};

ec2_shape! {
    /// Describes the details of the instance types offered in a Region.
    pub struct DescribeInstanceTypesRequest {
        dry_run: bool => "DryRun",
        /// Values from `InstanceType`.
        instance_types: [String] => "InstanceTypes",
        filters: [Filter] => "Filters",
        /// 5 to 100.
        max_results: i32 => "MaxResults",
        next_token: String => "NextToken",
    }
}

ec2_request!(DescribeInstanceTypesRequest => "DescribeInstanceTypes", paginated by DescribeInstanceTypesResult);

ec2_shape! {
    pub struct DescribeInstanceTypesResult {
        instance_types: [InstanceTypeInfo] => "InstanceTypes",
        next_token: String => "NextToken",
    }
}

ec2_shape! {
    /// Describes the processor used by the instance type.
    pub struct ProcessorInfo {
        /// Values from `ArchitectureType`.
        supported_architectures: [String] => "SupportedArchitectures",
        sustained_clock_speed_in_ghz: f64 => "SustainedClockSpeedInGhz",
    }
}

ec2_shape! {
    /// Describes the vCPU configurations for the instance type.
    pub struct VCpuInfo {
        default_v_cpus: i32 => "DefaultVCpus",
        default_cores: i32 => "DefaultCores",
        default_threads_per_core: i32 => "DefaultThreadsPerCore",
        valid_cores: [i32] => "ValidCores",
        valid_threads_per_core: [i32] => "ValidThreadsPerCore",
    }
}

ec2_shape! {
    pub struct MemoryInfo {
        size_in_mib: i64 => "SizeInMiB",
    }
}

ec2_shape! {
    pub struct DiskInfo {
        size_in_gb: i64 => "SizeInGB",
        count: i32 => "Count",
        /// One of `DiskType`.
        type_value: String => "Type",
    }
}

ec2_shape! {
    /// Describes the disks available for the instance type.
    pub struct InstanceStorageInfo {
        total_size_in_gb: i64 => "TotalSizeInGB",
        disks: [DiskInfo] => "Disks",
    }
}

ec2_shape! {
    pub struct EbsInfo {
        /// One of `EbsOptimizedSupport`.
        ebs_optimized_support: String => "EbsOptimizedSupport",
        /// One of `EbsEncryptionSupport`.
        encryption_support: String => "EncryptionSupport",
    }
}

ec2_shape! {
    /// Describes the networking features of the instance type.
    pub struct NetworkInfo {
        network_performance: String => "NetworkPerformance",
        maximum_network_interfaces: i32 => "MaximumNetworkInterfaces",
        ipv4_addresses_per_interface: i32 => "Ipv4AddressesPerInterface",
        ipv6_addresses_per_interface: i32 => "Ipv6AddressesPerInterface",
        ipv6_supported: bool => "Ipv6Supported",
        /// `unsupported`, `supported`, or `required`.
        ena_support: String => "EnaSupport",
    }
}

ec2_shape! {
    pub struct GpuDeviceMemoryInfo {
        size_in_mib: i32 => "SizeInMiB",
    }
}

ec2_shape! {
    pub struct GpuDeviceInfo {
        name: String => "Name",
        manufacturer: String => "Manufacturer",
        count: i32 => "Count",
        memory_info: GpuDeviceMemoryInfo => "MemoryInfo",
    }
}

ec2_shape! {
    pub struct GpuInfo {
        gpus: [GpuDeviceInfo] => "Gpus",
        total_gpu_memory_in_mib: i32 => "TotalGpuMemoryInMiB",
    }
}

ec2_shape! {
    pub struct FpgaDeviceMemoryInfo {
        size_in_mib: i32 => "SizeInMiB",
    }
}

ec2_shape! {
    pub struct FpgaDeviceInfo {
        name: String => "Name",
        manufacturer: String => "Manufacturer",
        count: i32 => "Count",
        memory_info: FpgaDeviceMemoryInfo => "MemoryInfo",
    }
}

ec2_shape! {
    pub struct FpgaInfo {
        fpgas: [FpgaDeviceInfo] => "Fpgas",
        total_fpga_memory_in_mib: i32 => "TotalFpgaMemoryInMiB",
    }
}

ec2_shape! {
    pub struct PlacementGroupInfo {
        /// Values from `PlacementGroupStrategy`.
        supported_strategies: [String] => "SupportedStrategies",
    }
}

ec2_shape! {
    pub struct InferenceDeviceInfo {
        count: i32 => "Count",
        name: String => "Name",
        manufacturer: String => "Manufacturer",
    }
}

ec2_shape! {
    pub struct InferenceAcceleratorInfo {
        accelerators: [InferenceDeviceInfo] => "Accelerators",
    }
}

ec2_shape! {
    /// Describes the instance type.
    pub struct InstanceTypeInfo {
        /// One of `InstanceType`.
        instance_type: String => "InstanceType",
        current_generation: bool => "CurrentGeneration",
        free_tier_eligible: bool => "FreeTierEligible",
        /// Values from `UsageClassType`.
        supported_usage_classes: [String] => "SupportedUsageClasses",
        /// Values from `DeviceType`.
        supported_root_device_types: [String] => "SupportedRootDeviceTypes",
        /// Values from `VirtualizationType`.
        supported_virtualization_types: [String] => "SupportedVirtualizationTypes",
        bare_metal: bool => "BareMetal",
        /// One of `InstanceTypeHypervisor`.
        hypervisor: String => "Hypervisor",
        processor_info: ProcessorInfo => "ProcessorInfo",
        v_cpu_info: VCpuInfo => "VCpuInfo",
        memory_info: MemoryInfo => "MemoryInfo",
        instance_storage_supported: bool => "InstanceStorageSupported",
        instance_storage_info: InstanceStorageInfo => "InstanceStorageInfo",
        ebs_info: EbsInfo => "EbsInfo",
        network_info: NetworkInfo => "NetworkInfo",
        gpu_info: GpuInfo => "GpuInfo",
        fpga_info: FpgaInfo => "FpgaInfo",
        placement_group_info: PlacementGroupInfo => "PlacementGroupInfo",
        inference_accelerator_info: InferenceAcceleratorInfo => "InferenceAcceleratorInfo",
        hibernation_supported: bool => "HibernationSupported",
        burstable_performance_supported: bool => "BurstablePerformanceSupported",
        dedicated_hosts_supported: bool => "DedicatedHostsSupported",
        auto_recovery_supported: bool => "AutoRecoverySupported",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_lists_and_doubles() {
        let info = InstanceTypeInfo::new()
            .with_instance_type("m5.large")
            .with_processor_info(
                ProcessorInfo::new()
                    .extend_supported_architectures(["x86_64"])
                    .with_sustained_clock_speed_in_ghz(3.1),
            )
            .with_v_cpu_info(VCpuInfo::new().with_default_v_cpus(2).extend_valid_cores([1]))
            .with_memory_info(MemoryInfo::new().with_size_in_mib(8192));

        assert_eq!(
            info.to_string(),
            "{InstanceType: m5.large,\
             ProcessorInfo: {SupportedArchitectures: [x86_64],SustainedClockSpeedInGhz: 3.1},\
             VCpuInfo: {DefaultVCpus: 2,ValidCores: [1]},\
             MemoryInfo: {SizeInMiB: 8192}}"
        );
    }

    #[test]
    fn test_decode_instance_type_json() {
        let payload = r#"{
            "InstanceTypes": [{
                "InstanceType": "t3.micro",
                "FreeTierEligible": true,
                "VCpuInfo": {"DefaultVCpus": 2, "ValidCores": [1], "ValidThreadsPerCore": [1, 2]},
                "MemoryInfo": {"SizeInMiB": 1024},
                "NetworkInfo": {"NetworkPerformance": "Up to 5 Gigabit", "EnaSupport": "required"}
            }],
            "NextToken": "abc"
        }"#;

        let result: DescribeInstanceTypesResult = serde_json::from_str(payload).unwrap();
        assert_eq!(result.next_token(), Some("abc"));

        let info = &result.instance_types().unwrap()[0];
        assert_eq!(info.free_tier_eligible(), Some(true));
        assert_eq!(info.v_cpu_info().and_then(VCpuInfo::valid_threads_per_core), Some(&[1, 2][..]));
        assert_eq!(info.memory_info().and_then(MemoryInfo::size_in_mib), Some(1024));
        assert_eq!(
            info.network_info().and_then(NetworkInfo::ena_support),
            Some("required")
        );
    }
}
