//! Closed value sets for enum-constrained string fields.
//!
//! Shapes store these as plain strings. Every enum converts into its
//! canonical `String`, so the string `with_*`/`set_*` accessors accept either
//! form and both land in the same field. Nothing here is checked against the
//! field it ends up in; the service rejects values it does not accept.

use crate::utils::error::{ModelError, Result};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

pub trait Ec2Enum: Copy + FromStr + AsRef<str> + IntoEnumIterator {
    const NAME: &'static str;

    /// Canonical value as sent on the wire.
    fn value(&self) -> &str {
        self.as_ref()
    }

    /// Strict lookup by canonical value. Empty and unknown strings are rejected.
    fn from_value(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(ModelError::UnknownEnumValue {
                enum_name: Self::NAME.to_string(),
                value: String::new(),
            });
        }
        value.parse().map_err(|_| ModelError::UnknownEnumValue {
            enum_name: Self::NAME.to_string(),
            value: value.to_string(),
        })
    }

    fn values() -> Vec<Self> {
        Self::iter().collect()
    }
}

macro_rules! ec2_enums {
    ($($name:ident),* $(,)?) => {
        $(
            impl Ec2Enum for $name {
                const NAME: &'static str = stringify!($name);
            }

            impl From<$name> for String {
                fn from(value: $name) -> Self {
                    value.as_ref().to_string()
                }
            }
        )*
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum AllocationStrategy {
    #[strum(serialize = "lowestPrice")]
    LowestPrice,
    #[strum(serialize = "diversified")]
    Diversified,
    #[strum(serialize = "capacityOptimized")]
    CapacityOptimized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum ArchitectureType {
    #[strum(serialize = "i386")]
    I386,
    #[strum(serialize = "x86_64")]
    X8664,
    #[strum(serialize = "arm64")]
    Arm64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum ArchitectureValues {
    #[strum(serialize = "i386")]
    I386,
    #[strum(serialize = "x86_64")]
    X8664,
    #[strum(serialize = "arm64")]
    Arm64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum AttachmentStatus {
    #[strum(serialize = "attaching")]
    Attaching,
    #[strum(serialize = "attached")]
    Attached,
    #[strum(serialize = "detaching")]
    Detaching,
    #[strum(serialize = "detached")]
    Detached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum BatchState {
    #[strum(serialize = "submitted")]
    Submitted,
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "cancelled")]
    Cancelled,
    #[strum(serialize = "failed")]
    Failed,
    #[strum(serialize = "cancelled_running")]
    CancelledRunning,
    #[strum(serialize = "cancelled_terminating")]
    CancelledTerminating,
    #[strum(serialize = "modifying")]
    Modifying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum CapacityReservationInstancePlatform {
    #[strum(serialize = "Linux/UNIX")]
    LinuxUnix,
    #[strum(serialize = "Red Hat Enterprise Linux")]
    RedHatEnterpriseLinux,
    #[strum(serialize = "SUSE Linux")]
    SuseLinux,
    #[strum(serialize = "Windows")]
    Windows,
    #[strum(serialize = "Windows with SQL Server")]
    WindowsWithSqlServer,
    #[strum(serialize = "Windows with SQL Server Enterprise")]
    WindowsWithSqlServerEnterprise,
    #[strum(serialize = "Windows with SQL Server Standard")]
    WindowsWithSqlServerStandard,
    #[strum(serialize = "Windows with SQL Server Web")]
    WindowsWithSqlServerWeb,
    #[strum(serialize = "Linux with SQL Server Standard")]
    LinuxWithSqlServerStandard,
    #[strum(serialize = "Linux with SQL Server Web")]
    LinuxWithSqlServerWeb,
    #[strum(serialize = "Linux with SQL Server Enterprise")]
    LinuxWithSqlServerEnterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum CapacityReservationPreference {
    #[strum(serialize = "open")]
    Open,
    #[strum(serialize = "none")]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum CapacityReservationState {
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "expired")]
    Expired,
    #[strum(serialize = "cancelled")]
    Cancelled,
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "failed")]
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum CapacityReservationTenancy {
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "dedicated")]
    Dedicated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum CurrencyCodeValues {
    #[strum(serialize = "USD")]
    Usd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum DefaultTargetCapacityType {
    #[strum(serialize = "spot")]
    Spot,
    #[strum(serialize = "on-demand")]
    OnDemand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum DeviceType {
    #[strum(serialize = "ebs")]
    Ebs,
    #[strum(serialize = "instance-store")]
    InstanceStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum DiskType {
    #[strum(serialize = "hdd")]
    Hdd,
    #[strum(serialize = "ssd")]
    Ssd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum EbsEncryptionSupport {
    #[strum(serialize = "unsupported")]
    Unsupported,
    #[strum(serialize = "supported")]
    Supported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum EbsOptimizedSupport {
    #[strum(serialize = "unsupported")]
    Unsupported,
    #[strum(serialize = "supported")]
    Supported,
    #[strum(serialize = "default")]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum EndDateType {
    #[strum(serialize = "unlimited")]
    Unlimited,
    #[strum(serialize = "limited")]
    Limited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum ExcessCapacityTerminationPolicy {
    #[strum(serialize = "noTermination")]
    NoTermination,
    #[strum(serialize = "default")]
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum FleetActivityStatus {
    #[strum(serialize = "error")]
    Error,
    #[strum(serialize = "pending_fulfillment")]
    PendingFulfillment,
    #[strum(serialize = "pending_termination")]
    PendingTermination,
    #[strum(serialize = "fulfilled")]
    Fulfilled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum FleetExcessCapacityTerminationPolicy {
    #[strum(serialize = "no-termination")]
    NoTermination,
    #[strum(serialize = "termination")]
    Termination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum FleetStateCode {
    #[strum(serialize = "submitted")]
    Submitted,
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "deleted")]
    Deleted,
    #[strum(serialize = "failed")]
    Failed,
    #[strum(serialize = "deleted_running")]
    DeletedRunning,
    #[strum(serialize = "deleted_terminating")]
    DeletedTerminating,
    #[strum(serialize = "modifying")]
    Modifying,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum FleetType {
    #[strum(serialize = "request")]
    Request,
    #[strum(serialize = "maintain")]
    Maintain,
    #[strum(serialize = "instant")]
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum FlowLogsResourceType {
    #[strum(serialize = "VPC")]
    Vpc,
    #[strum(serialize = "Subnet")]
    Subnet,
    #[strum(serialize = "NetworkInterface")]
    NetworkInterface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum HttpTokensState {
    #[strum(serialize = "optional")]
    Optional,
    #[strum(serialize = "required")]
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum HypervisorType {
    #[strum(serialize = "ovm")]
    Ovm,
    #[strum(serialize = "xen")]
    Xen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum ImageState {
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "available")]
    Available,
    #[strum(serialize = "invalid")]
    Invalid,
    #[strum(serialize = "deregistered")]
    Deregistered,
    #[strum(serialize = "transient")]
    Transient,
    #[strum(serialize = "failed")]
    Failed,
    #[strum(serialize = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum ImageTypeValues {
    #[strum(serialize = "machine")]
    Machine,
    #[strum(serialize = "kernel")]
    Kernel,
    #[strum(serialize = "ramdisk")]
    Ramdisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum InstanceInterruptionBehavior {
    #[strum(serialize = "hibernate")]
    Hibernate,
    #[strum(serialize = "stop")]
    Stop,
    #[strum(serialize = "terminate")]
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum InstanceLifecycleType {
    #[strum(serialize = "spot")]
    Spot,
    #[strum(serialize = "scheduled")]
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum InstanceMatchCriteria {
    #[strum(serialize = "open")]
    Open,
    #[strum(serialize = "targeted")]
    Targeted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum InstanceMetadataEndpointState {
    #[strum(serialize = "disabled")]
    Disabled,
    #[strum(serialize = "enabled")]
    Enabled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum InstanceMetadataOptionsState {
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "applied")]
    Applied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum InstanceStateName {
    #[strum(serialize = "pending")]
    Pending,
    #[strum(serialize = "running")]
    Running,
    #[strum(serialize = "shutting-down")]
    ShuttingDown,
    #[strum(serialize = "terminated")]
    Terminated,
    #[strum(serialize = "stopping")]
    Stopping,
    #[strum(serialize = "stopped")]
    Stopped,
}

/// EC2 instance types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum InstanceType {
    #[strum(serialize = "t1.micro")]
    T1Micro,
    #[strum(serialize = "t2.nano")]
    T2Nano,
    #[strum(serialize = "t2.micro")]
    T2Micro,
    #[strum(serialize = "t2.small")]
    T2Small,
    #[strum(serialize = "t2.medium")]
    T2Medium,
    #[strum(serialize = "t2.large")]
    T2Large,
    #[strum(serialize = "t2.xlarge")]
    T2Xlarge,
    #[strum(serialize = "t2.2xlarge")]
    T22xlarge,
    #[strum(serialize = "t3.nano")]
    T3Nano,
    #[strum(serialize = "t3.micro")]
    T3Micro,
    #[strum(serialize = "t3.small")]
    T3Small,
    #[strum(serialize = "t3.medium")]
    T3Medium,
    #[strum(serialize = "t3.large")]
    T3Large,
    #[strum(serialize = "t3.xlarge")]
    T3Xlarge,
    #[strum(serialize = "t3.2xlarge")]
    T32xlarge,
    #[strum(serialize = "t3a.nano")]
    T3aNano,
    #[strum(serialize = "t3a.micro")]
    T3aMicro,
    #[strum(serialize = "t3a.small")]
    T3aSmall,
    #[strum(serialize = "t3a.medium")]
    T3aMedium,
    #[strum(serialize = "t3a.large")]
    T3aLarge,
    #[strum(serialize = "t3a.xlarge")]
    T3aXlarge,
    #[strum(serialize = "t3a.2xlarge")]
    T3a2xlarge,
    #[strum(serialize = "m1.small")]
    M1Small,
    #[strum(serialize = "m1.medium")]
    M1Medium,
    #[strum(serialize = "m1.large")]
    M1Large,
    #[strum(serialize = "m1.xlarge")]
    M1Xlarge,
    #[strum(serialize = "m3.medium")]
    M3Medium,
    #[strum(serialize = "m3.large")]
    M3Large,
    #[strum(serialize = "m3.xlarge")]
    M3Xlarge,
    #[strum(serialize = "m3.2xlarge")]
    M32xlarge,
    #[strum(serialize = "m4.large")]
    M4Large,
    #[strum(serialize = "m4.xlarge")]
    M4Xlarge,
    #[strum(serialize = "m4.2xlarge")]
    M42xlarge,
    #[strum(serialize = "m4.4xlarge")]
    M44xlarge,
    #[strum(serialize = "m4.10xlarge")]
    M410xlarge,
    #[strum(serialize = "m4.16xlarge")]
    M416xlarge,
    #[strum(serialize = "m2.xlarge")]
    M2Xlarge,
    #[strum(serialize = "m2.2xlarge")]
    M22xlarge,
    #[strum(serialize = "m2.4xlarge")]
    M24xlarge,
    #[strum(serialize = "cr1.8xlarge")]
    Cr18xlarge,
    #[strum(serialize = "r3.large")]
    R3Large,
    #[strum(serialize = "r3.xlarge")]
    R3Xlarge,
    #[strum(serialize = "r3.2xlarge")]
    R32xlarge,
    #[strum(serialize = "r3.4xlarge")]
    R34xlarge,
    #[strum(serialize = "r3.8xlarge")]
    R38xlarge,
    #[strum(serialize = "r4.large")]
    R4Large,
    #[strum(serialize = "r4.xlarge")]
    R4Xlarge,
    #[strum(serialize = "r4.2xlarge")]
    R42xlarge,
    #[strum(serialize = "r4.4xlarge")]
    R44xlarge,
    #[strum(serialize = "r4.8xlarge")]
    R48xlarge,
    #[strum(serialize = "r4.16xlarge")]
    R416xlarge,
    #[strum(serialize = "r5.large")]
    R5Large,
    #[strum(serialize = "r5.xlarge")]
    R5Xlarge,
    #[strum(serialize = "r5.2xlarge")]
    R52xlarge,
    #[strum(serialize = "r5.4xlarge")]
    R54xlarge,
    #[strum(serialize = "r5.8xlarge")]
    R58xlarge,
    #[strum(serialize = "r5.12xlarge")]
    R512xlarge,
    #[strum(serialize = "r5.16xlarge")]
    R516xlarge,
    #[strum(serialize = "r5.24xlarge")]
    R524xlarge,
    #[strum(serialize = "r5.metal")]
    R5Metal,
    #[strum(serialize = "r5a.large")]
    R5aLarge,
    #[strum(serialize = "r5a.xlarge")]
    R5aXlarge,
    #[strum(serialize = "r5a.2xlarge")]
    R5a2xlarge,
    #[strum(serialize = "r5a.4xlarge")]
    R5a4xlarge,
    #[strum(serialize = "r5a.8xlarge")]
    R5a8xlarge,
    #[strum(serialize = "r5a.12xlarge")]
    R5a12xlarge,
    #[strum(serialize = "r5a.16xlarge")]
    R5a16xlarge,
    #[strum(serialize = "r5a.24xlarge")]
    R5a24xlarge,
    #[strum(serialize = "r5d.large")]
    R5dLarge,
    #[strum(serialize = "r5d.xlarge")]
    R5dXlarge,
    #[strum(serialize = "r5d.2xlarge")]
    R5d2xlarge,
    #[strum(serialize = "r5d.4xlarge")]
    R5d4xlarge,
    #[strum(serialize = "r5d.8xlarge")]
    R5d8xlarge,
    #[strum(serialize = "r5d.12xlarge")]
    R5d12xlarge,
    #[strum(serialize = "r5d.16xlarge")]
    R5d16xlarge,
    #[strum(serialize = "r5d.24xlarge")]
    R5d24xlarge,
    #[strum(serialize = "r5d.metal")]
    R5dMetal,
    #[strum(serialize = "r5ad.large")]
    R5adLarge,
    #[strum(serialize = "r5ad.xlarge")]
    R5adXlarge,
    #[strum(serialize = "r5ad.2xlarge")]
    R5ad2xlarge,
    #[strum(serialize = "r5ad.4xlarge")]
    R5ad4xlarge,
    #[strum(serialize = "r5ad.8xlarge")]
    R5ad8xlarge,
    #[strum(serialize = "r5ad.12xlarge")]
    R5ad12xlarge,
    #[strum(serialize = "r5ad.16xlarge")]
    R5ad16xlarge,
    #[strum(serialize = "r5ad.24xlarge")]
    R5ad24xlarge,
    #[strum(serialize = "r6g.metal")]
    R6gMetal,
    #[strum(serialize = "r6g.medium")]
    R6gMedium,
    #[strum(serialize = "r6g.large")]
    R6gLarge,
    #[strum(serialize = "r6g.xlarge")]
    R6gXlarge,
    #[strum(serialize = "r6g.2xlarge")]
    R6g2xlarge,
    #[strum(serialize = "r6g.4xlarge")]
    R6g4xlarge,
    #[strum(serialize = "r6g.8xlarge")]
    R6g8xlarge,
    #[strum(serialize = "r6g.12xlarge")]
    R6g12xlarge,
    #[strum(serialize = "r6g.16xlarge")]
    R6g16xlarge,
    #[strum(serialize = "x1.16xlarge")]
    X116xlarge,
    #[strum(serialize = "x1.32xlarge")]
    X132xlarge,
    #[strum(serialize = "x1e.xlarge")]
    X1eXlarge,
    #[strum(serialize = "x1e.2xlarge")]
    X1e2xlarge,
    #[strum(serialize = "x1e.4xlarge")]
    X1e4xlarge,
    #[strum(serialize = "x1e.8xlarge")]
    X1e8xlarge,
    #[strum(serialize = "x1e.16xlarge")]
    X1e16xlarge,
    #[strum(serialize = "x1e.32xlarge")]
    X1e32xlarge,
    #[strum(serialize = "i2.xlarge")]
    I2Xlarge,
    #[strum(serialize = "i2.2xlarge")]
    I22xlarge,
    #[strum(serialize = "i2.4xlarge")]
    I24xlarge,
    #[strum(serialize = "i2.8xlarge")]
    I28xlarge,
    #[strum(serialize = "i3.large")]
    I3Large,
    #[strum(serialize = "i3.xlarge")]
    I3Xlarge,
    #[strum(serialize = "i3.2xlarge")]
    I32xlarge,
    #[strum(serialize = "i3.4xlarge")]
    I34xlarge,
    #[strum(serialize = "i3.8xlarge")]
    I38xlarge,
    #[strum(serialize = "i3.16xlarge")]
    I316xlarge,
    #[strum(serialize = "i3.metal")]
    I3Metal,
    #[strum(serialize = "i3en.large")]
    I3enLarge,
    #[strum(serialize = "i3en.xlarge")]
    I3enXlarge,
    #[strum(serialize = "i3en.2xlarge")]
    I3en2xlarge,
    #[strum(serialize = "i3en.3xlarge")]
    I3en3xlarge,
    #[strum(serialize = "i3en.6xlarge")]
    I3en6xlarge,
    #[strum(serialize = "i3en.12xlarge")]
    I3en12xlarge,
    #[strum(serialize = "i3en.24xlarge")]
    I3en24xlarge,
    #[strum(serialize = "i3en.metal")]
    I3enMetal,
    #[strum(serialize = "hi1.4xlarge")]
    Hi14xlarge,
    #[strum(serialize = "hs1.8xlarge")]
    Hs18xlarge,
    #[strum(serialize = "c1.medium")]
    C1Medium,
    #[strum(serialize = "c1.xlarge")]
    C1Xlarge,
    #[strum(serialize = "c3.large")]
    C3Large,
    #[strum(serialize = "c3.xlarge")]
    C3Xlarge,
    #[strum(serialize = "c3.2xlarge")]
    C32xlarge,
    #[strum(serialize = "c3.4xlarge")]
    C34xlarge,
    #[strum(serialize = "c3.8xlarge")]
    C38xlarge,
    #[strum(serialize = "c4.large")]
    C4Large,
    #[strum(serialize = "c4.xlarge")]
    C4Xlarge,
    #[strum(serialize = "c4.2xlarge")]
    C42xlarge,
    #[strum(serialize = "c4.4xlarge")]
    C44xlarge,
    #[strum(serialize = "c4.8xlarge")]
    C48xlarge,
    #[strum(serialize = "c5.large")]
    C5Large,
    #[strum(serialize = "c5.xlarge")]
    C5Xlarge,
    #[strum(serialize = "c5.2xlarge")]
    C52xlarge,
    #[strum(serialize = "c5.4xlarge")]
    C54xlarge,
    #[strum(serialize = "c5.9xlarge")]
    C59xlarge,
    #[strum(serialize = "c5.12xlarge")]
    C512xlarge,
    #[strum(serialize = "c5.18xlarge")]
    C518xlarge,
    #[strum(serialize = "c5.24xlarge")]
    C524xlarge,
    #[strum(serialize = "c5.metal")]
    C5Metal,
    #[strum(serialize = "c5a.large")]
    C5aLarge,
    #[strum(serialize = "c5a.xlarge")]
    C5aXlarge,
    #[strum(serialize = "c5a.2xlarge")]
    C5a2xlarge,
    #[strum(serialize = "c5a.4xlarge")]
    C5a4xlarge,
    #[strum(serialize = "c5a.8xlarge")]
    C5a8xlarge,
    #[strum(serialize = "c5a.12xlarge")]
    C5a12xlarge,
    #[strum(serialize = "c5a.16xlarge")]
    C5a16xlarge,
    #[strum(serialize = "c5a.24xlarge")]
    C5a24xlarge,
    #[strum(serialize = "c5d.large")]
    C5dLarge,
    #[strum(serialize = "c5d.xlarge")]
    C5dXlarge,
    #[strum(serialize = "c5d.2xlarge")]
    C5d2xlarge,
    #[strum(serialize = "c5d.4xlarge")]
    C5d4xlarge,
    #[strum(serialize = "c5d.9xlarge")]
    C5d9xlarge,
    #[strum(serialize = "c5d.12xlarge")]
    C5d12xlarge,
    #[strum(serialize = "c5d.18xlarge")]
    C5d18xlarge,
    #[strum(serialize = "c5d.24xlarge")]
    C5d24xlarge,
    #[strum(serialize = "c5d.metal")]
    C5dMetal,
    #[strum(serialize = "c5n.large")]
    C5nLarge,
    #[strum(serialize = "c5n.xlarge")]
    C5nXlarge,
    #[strum(serialize = "c5n.2xlarge")]
    C5n2xlarge,
    #[strum(serialize = "c5n.4xlarge")]
    C5n4xlarge,
    #[strum(serialize = "c5n.9xlarge")]
    C5n9xlarge,
    #[strum(serialize = "c5n.18xlarge")]
    C5n18xlarge,
    #[strum(serialize = "c6g.metal")]
    C6gMetal,
    #[strum(serialize = "c6g.medium")]
    C6gMedium,
    #[strum(serialize = "c6g.large")]
    C6gLarge,
    #[strum(serialize = "c6g.xlarge")]
    C6gXlarge,
    #[strum(serialize = "c6g.2xlarge")]
    C6g2xlarge,
    #[strum(serialize = "c6g.4xlarge")]
    C6g4xlarge,
    #[strum(serialize = "c6g.8xlarge")]
    C6g8xlarge,
    #[strum(serialize = "c6g.12xlarge")]
    C6g12xlarge,
    #[strum(serialize = "c6g.16xlarge")]
    C6g16xlarge,
    #[strum(serialize = "cc1.4xlarge")]
    Cc14xlarge,
    #[strum(serialize = "cc2.8xlarge")]
    Cc28xlarge,
    #[strum(serialize = "g2.2xlarge")]
    G22xlarge,
    #[strum(serialize = "g2.8xlarge")]
    G28xlarge,
    #[strum(serialize = "g3.4xlarge")]
    G34xlarge,
    #[strum(serialize = "g3.8xlarge")]
    G38xlarge,
    #[strum(serialize = "g3.16xlarge")]
    G316xlarge,
    #[strum(serialize = "g3s.xlarge")]
    G3sXlarge,
    #[strum(serialize = "g4dn.xlarge")]
    G4dnXlarge,
    #[strum(serialize = "g4dn.2xlarge")]
    G4dn2xlarge,
    #[strum(serialize = "g4dn.4xlarge")]
    G4dn4xlarge,
    #[strum(serialize = "g4dn.8xlarge")]
    G4dn8xlarge,
    #[strum(serialize = "g4dn.12xlarge")]
    G4dn12xlarge,
    #[strum(serialize = "g4dn.16xlarge")]
    G4dn16xlarge,
    #[strum(serialize = "g4dn.metal")]
    G4dnMetal,
    #[strum(serialize = "cg1.4xlarge")]
    Cg14xlarge,
    #[strum(serialize = "p2.xlarge")]
    P2Xlarge,
    #[strum(serialize = "p2.8xlarge")]
    P28xlarge,
    #[strum(serialize = "p2.16xlarge")]
    P216xlarge,
    #[strum(serialize = "p3.2xlarge")]
    P32xlarge,
    #[strum(serialize = "p3.8xlarge")]
    P38xlarge,
    #[strum(serialize = "p3.16xlarge")]
    P316xlarge,
    #[strum(serialize = "p3dn.24xlarge")]
    P3dn24xlarge,
    #[strum(serialize = "d2.xlarge")]
    D2Xlarge,
    #[strum(serialize = "d2.2xlarge")]
    D22xlarge,
    #[strum(serialize = "d2.4xlarge")]
    D24xlarge,
    #[strum(serialize = "d2.8xlarge")]
    D28xlarge,
    #[strum(serialize = "f1.2xlarge")]
    F12xlarge,
    #[strum(serialize = "f1.4xlarge")]
    F14xlarge,
    #[strum(serialize = "f1.16xlarge")]
    F116xlarge,
    #[strum(serialize = "m5.large")]
    M5Large,
    #[strum(serialize = "m5.xlarge")]
    M5Xlarge,
    #[strum(serialize = "m5.2xlarge")]
    M52xlarge,
    #[strum(serialize = "m5.4xlarge")]
    M54xlarge,
    #[strum(serialize = "m5.8xlarge")]
    M58xlarge,
    #[strum(serialize = "m5.12xlarge")]
    M512xlarge,
    #[strum(serialize = "m5.16xlarge")]
    M516xlarge,
    #[strum(serialize = "m5.24xlarge")]
    M524xlarge,
    #[strum(serialize = "m5.metal")]
    M5Metal,
    #[strum(serialize = "m5a.large")]
    M5aLarge,
    #[strum(serialize = "m5a.xlarge")]
    M5aXlarge,
    #[strum(serialize = "m5a.2xlarge")]
    M5a2xlarge,
    #[strum(serialize = "m5a.4xlarge")]
    M5a4xlarge,
    #[strum(serialize = "m5a.8xlarge")]
    M5a8xlarge,
    #[strum(serialize = "m5a.12xlarge")]
    M5a12xlarge,
    #[strum(serialize = "m5a.16xlarge")]
    M5a16xlarge,
    #[strum(serialize = "m5a.24xlarge")]
    M5a24xlarge,
    #[strum(serialize = "m5d.large")]
    M5dLarge,
    #[strum(serialize = "m5d.xlarge")]
    M5dXlarge,
    #[strum(serialize = "m5d.2xlarge")]
    M5d2xlarge,
    #[strum(serialize = "m5d.4xlarge")]
    M5d4xlarge,
    #[strum(serialize = "m5d.8xlarge")]
    M5d8xlarge,
    #[strum(serialize = "m5d.12xlarge")]
    M5d12xlarge,
    #[strum(serialize = "m5d.16xlarge")]
    M5d16xlarge,
    #[strum(serialize = "m5d.24xlarge")]
    M5d24xlarge,
    #[strum(serialize = "m5d.metal")]
    M5dMetal,
    #[strum(serialize = "m5ad.large")]
    M5adLarge,
    #[strum(serialize = "m5ad.xlarge")]
    M5adXlarge,
    #[strum(serialize = "m5ad.2xlarge")]
    M5ad2xlarge,
    #[strum(serialize = "m5ad.4xlarge")]
    M5ad4xlarge,
    #[strum(serialize = "m5ad.8xlarge")]
    M5ad8xlarge,
    #[strum(serialize = "m5ad.12xlarge")]
    M5ad12xlarge,
    #[strum(serialize = "m5ad.16xlarge")]
    M5ad16xlarge,
    #[strum(serialize = "m5ad.24xlarge")]
    M5ad24xlarge,
    #[strum(serialize = "h1.2xlarge")]
    H12xlarge,
    #[strum(serialize = "h1.4xlarge")]
    H14xlarge,
    #[strum(serialize = "h1.8xlarge")]
    H18xlarge,
    #[strum(serialize = "h1.16xlarge")]
    H116xlarge,
    #[strum(serialize = "z1d.large")]
    Z1dLarge,
    #[strum(serialize = "z1d.xlarge")]
    Z1dXlarge,
    #[strum(serialize = "z1d.2xlarge")]
    Z1d2xlarge,
    #[strum(serialize = "z1d.3xlarge")]
    Z1d3xlarge,
    #[strum(serialize = "z1d.6xlarge")]
    Z1d6xlarge,
    #[strum(serialize = "z1d.12xlarge")]
    Z1d12xlarge,
    #[strum(serialize = "z1d.metal")]
    Z1dMetal,
    #[strum(serialize = "u-6tb1.metal")]
    U6tb1Metal,
    #[strum(serialize = "u-9tb1.metal")]
    U9tb1Metal,
    #[strum(serialize = "u-12tb1.metal")]
    U12tb1Metal,
    #[strum(serialize = "u-18tb1.metal")]
    U18tb1Metal,
    #[strum(serialize = "u-24tb1.metal")]
    U24tb1Metal,
    #[strum(serialize = "a1.medium")]
    A1Medium,
    #[strum(serialize = "a1.large")]
    A1Large,
    #[strum(serialize = "a1.xlarge")]
    A1Xlarge,
    #[strum(serialize = "a1.2xlarge")]
    A12xlarge,
    #[strum(serialize = "a1.4xlarge")]
    A14xlarge,
    #[strum(serialize = "a1.metal")]
    A1Metal,
    #[strum(serialize = "m5dn.large")]
    M5dnLarge,
    #[strum(serialize = "m5dn.xlarge")]
    M5dnXlarge,
    #[strum(serialize = "m5dn.2xlarge")]
    M5dn2xlarge,
    #[strum(serialize = "m5dn.4xlarge")]
    M5dn4xlarge,
    #[strum(serialize = "m5dn.8xlarge")]
    M5dn8xlarge,
    #[strum(serialize = "m5dn.12xlarge")]
    M5dn12xlarge,
    #[strum(serialize = "m5dn.16xlarge")]
    M5dn16xlarge,
    #[strum(serialize = "m5dn.24xlarge")]
    M5dn24xlarge,
    #[strum(serialize = "m5n.large")]
    M5nLarge,
    #[strum(serialize = "m5n.xlarge")]
    M5nXlarge,
    #[strum(serialize = "m5n.2xlarge")]
    M5n2xlarge,
    #[strum(serialize = "m5n.4xlarge")]
    M5n4xlarge,
    #[strum(serialize = "m5n.8xlarge")]
    M5n8xlarge,
    #[strum(serialize = "m5n.12xlarge")]
    M5n12xlarge,
    #[strum(serialize = "m5n.16xlarge")]
    M5n16xlarge,
    #[strum(serialize = "m5n.24xlarge")]
    M5n24xlarge,
    #[strum(serialize = "r5dn.large")]
    R5dnLarge,
    #[strum(serialize = "r5dn.xlarge")]
    R5dnXlarge,
    #[strum(serialize = "r5dn.2xlarge")]
    R5dn2xlarge,
    #[strum(serialize = "r5dn.4xlarge")]
    R5dn4xlarge,
    #[strum(serialize = "r5dn.8xlarge")]
    R5dn8xlarge,
    #[strum(serialize = "r5dn.12xlarge")]
    R5dn12xlarge,
    #[strum(serialize = "r5dn.16xlarge")]
    R5dn16xlarge,
    #[strum(serialize = "r5dn.24xlarge")]
    R5dn24xlarge,
    #[strum(serialize = "r5n.large")]
    R5nLarge,
    #[strum(serialize = "r5n.xlarge")]
    R5nXlarge,
    #[strum(serialize = "r5n.2xlarge")]
    R5n2xlarge,
    #[strum(serialize = "r5n.4xlarge")]
    R5n4xlarge,
    #[strum(serialize = "r5n.8xlarge")]
    R5n8xlarge,
    #[strum(serialize = "r5n.12xlarge")]
    R5n12xlarge,
    #[strum(serialize = "r5n.16xlarge")]
    R5n16xlarge,
    #[strum(serialize = "r5n.24xlarge")]
    R5n24xlarge,
    #[strum(serialize = "inf1.xlarge")]
    Inf1Xlarge,
    #[strum(serialize = "inf1.2xlarge")]
    Inf12xlarge,
    #[strum(serialize = "inf1.6xlarge")]
    Inf16xlarge,
    #[strum(serialize = "inf1.24xlarge")]
    Inf124xlarge,
    #[strum(serialize = "m6g.metal")]
    M6gMetal,
    #[strum(serialize = "m6g.medium")]
    M6gMedium,
    #[strum(serialize = "m6g.large")]
    M6gLarge,
    #[strum(serialize = "m6g.xlarge")]
    M6gXlarge,
    #[strum(serialize = "m6g.2xlarge")]
    M6g2xlarge,
    #[strum(serialize = "m6g.4xlarge")]
    M6g4xlarge,
    #[strum(serialize = "m6g.8xlarge")]
    M6g8xlarge,
    #[strum(serialize = "m6g.12xlarge")]
    M6g12xlarge,
    #[strum(serialize = "m6g.16xlarge / private String instanceType; /")]
    M6g16xlargePrivateStringInstanceType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum InstanceTypeHypervisor {
    #[strum(serialize = "nitro")]
    Nitro,
    #[strum(serialize = "xen")]
    Xen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum LogDestinationType {
    #[strum(serialize = "cloud-watch-logs")]
    CloudWatchLogs,
    #[strum(serialize = "s3")]
    S3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum MarketType {
    #[strum(serialize = "spot")]
    Spot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum MonitoringState {
    #[strum(serialize = "disabled")]
    Disabled,
    #[strum(serialize = "disabling")]
    Disabling,
    #[strum(serialize = "enabled")]
    Enabled,
    #[strum(serialize = "pending")]
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum NetworkInterfaceStatus {
    #[strum(serialize = "available")]
    Available,
    #[strum(serialize = "associated")]
    Associated,
    #[strum(serialize = "attaching")]
    Attaching,
    #[strum(serialize = "in-use")]
    InUse,
    #[strum(serialize = "detaching")]
    Detaching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum NetworkInterfaceType {
    #[strum(serialize = "interface")]
    Interface,
    #[strum(serialize = "natGateway")]
    NatGateway,
    #[strum(serialize = "efa")]
    Efa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum OfferingClassType {
    #[strum(serialize = "standard")]
    Standard,
    #[strum(serialize = "convertible")]
    Convertible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum OfferingTypeValues {
    #[strum(serialize = "Heavy Utilization")]
    HeavyUtilization,
    #[strum(serialize = "Medium Utilization")]
    MediumUtilization,
    #[strum(serialize = "Light Utilization")]
    LightUtilization,
    #[strum(serialize = "No Upfront")]
    NoUpfront,
    #[strum(serialize = "Partial Upfront")]
    PartialUpfront,
    #[strum(serialize = "All Upfront")]
    AllUpfront,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum OnDemandAllocationStrategy {
    #[strum(serialize = "lowestPrice")]
    LowestPrice,
    #[strum(serialize = "prioritized")]
    Prioritized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum PlacementGroupStrategy {
    #[strum(serialize = "cluster")]
    Cluster,
    #[strum(serialize = "partition")]
    Partition,
    #[strum(serialize = "spread")]
    Spread,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum PlatformValues {
    #[strum(serialize = "Windows")]
    Windows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum ProductCodeValues {
    #[strum(serialize = "devpay")]
    Devpay,
    #[strum(serialize = "marketplace")]
    Marketplace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum RIProductDescription {
    #[strum(serialize = "Linux/UNIX")]
    LinuxUnix,
    #[strum(serialize = "Linux/UNIX (Amazon VPC)")]
    LinuxUnixAmazonVpc,
    #[strum(serialize = "Windows")]
    Windows,
    #[strum(serialize = "Windows (Amazon VPC)")]
    WindowsAmazonVpc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum RecurringChargeFrequency {
    #[strum(serialize = "Hourly")]
    Hourly,
}

/// Resource types that accept tags on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum ResourceType {
    #[strum(serialize = "capacity-reservation")]
    CapacityReservation,
    #[strum(serialize = "client-vpn-endpoint")]
    ClientVpnEndpoint,
    #[strum(serialize = "customer-gateway")]
    CustomerGateway,
    #[strum(serialize = "dedicated-host")]
    DedicatedHost,
    #[strum(serialize = "dhcp-options")]
    DhcpOptions,
    #[strum(serialize = "elastic-ip")]
    ElasticIp,
    #[strum(serialize = "fleet")]
    Fleet,
    #[strum(serialize = "fpga-image")]
    FpgaImage,
    #[strum(serialize = "host-reservation")]
    HostReservation,
    #[strum(serialize = "image")]
    Image,
    #[strum(serialize = "instance")]
    Instance,
    #[strum(serialize = "internet-gateway")]
    InternetGateway,
    #[strum(serialize = "launch-template")]
    LaunchTemplate,
    #[strum(serialize = "natgateway")]
    Natgateway,
    #[strum(serialize = "network-acl")]
    NetworkAcl,
    #[strum(serialize = "network-interface")]
    NetworkInterface,
    #[strum(serialize = "placement-group")]
    PlacementGroup,
    #[strum(serialize = "reserved-instances")]
    ReservedInstances,
    #[strum(serialize = "route-table")]
    RouteTable,
    #[strum(serialize = "security-group")]
    SecurityGroup,
    #[strum(serialize = "snapshot")]
    Snapshot,
    #[strum(serialize = "spot-fleet-request")]
    SpotFleetRequest,
    #[strum(serialize = "spot-instances-request")]
    SpotInstancesRequest,
    #[strum(serialize = "subnet")]
    Subnet,
    #[strum(serialize = "traffic-mirror-filter")]
    TrafficMirrorFilter,
    #[strum(serialize = "traffic-mirror-session")]
    TrafficMirrorSession,
    #[strum(serialize = "traffic-mirror-target")]
    TrafficMirrorTarget,
    #[strum(serialize = "transit-gateway")]
    TransitGateway,
    #[strum(serialize = "transit-gateway-attachment")]
    TransitGatewayAttachment,
    #[strum(serialize = "transit-gateway-multicast-domain")]
    TransitGatewayMulticastDomain,
    #[strum(serialize = "transit-gateway-route-table")]
    TransitGatewayRouteTable,
    #[strum(serialize = "volume")]
    Volume,
    #[strum(serialize = "vpc")]
    Vpc,
    #[strum(serialize = "vpc-peering-connection")]
    VpcPeeringConnection,
    #[strum(serialize = "vpn-connection")]
    VpnConnection,
    #[strum(serialize = "vpn-gateway")]
    VpnGateway,
    #[strum(serialize = "vpc-flow-log")]
    VpcFlowLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum RouteOrigin {
    #[strum(serialize = "CreateRouteTable")]
    CreateRouteTable,
    #[strum(serialize = "CreateRoute")]
    CreateRoute,
    #[strum(serialize = "EnableVgwRoutePropagation")]
    EnableVgwRoutePropagation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum RouteState {
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "blackhole")]
    Blackhole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum Scope {
    #[strum(serialize = "Availability Zone")]
    AvailabilityZone,
    #[strum(serialize = "Region")]
    Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum ShutdownBehavior {
    #[strum(serialize = "stop")]
    Stop,
    #[strum(serialize = "terminate")]
    Terminate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum SpotInstanceState {
    #[strum(serialize = "open")]
    Open,
    #[strum(serialize = "active")]
    Active,
    #[strum(serialize = "closed")]
    Closed,
    #[strum(serialize = "cancelled")]
    Cancelled,
    #[strum(serialize = "failed")]
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum SpotInstanceType {
    #[strum(serialize = "one-time")]
    OneTime,
    #[strum(serialize = "persistent")]
    Persistent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum Tenancy {
    #[strum(serialize = "default")]
    Default,
    #[strum(serialize = "dedicated")]
    Dedicated,
    #[strum(serialize = "host")]
    Host,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum TrafficType {
    #[strum(serialize = "ACCEPT")]
    Accept,
    #[strum(serialize = "REJECT")]
    Reject,
    #[strum(serialize = "ALL")]
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum UsageClassType {
    #[strum(serialize = "spot")]
    Spot,
    #[strum(serialize = "on-demand")]
    OnDemand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum VirtualizationType {
    #[strum(serialize = "hvm")]
    Hvm,
    #[strum(serialize = "paravirtual")]
    Paravirtual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, AsRefStr, EnumIter)]
pub enum VolumeType {
    #[strum(serialize = "standard")]
    Standard,
    #[strum(serialize = "io1")]
    Io1,
    #[strum(serialize = "gp2")]
    Gp2,
    #[strum(serialize = "sc1")]
    Sc1,
    #[strum(serialize = "st1")]
    St1,
}

ec2_enums! {
    AllocationStrategy,
    ArchitectureType,
    ArchitectureValues,
    AttachmentStatus,
    BatchState,
    CapacityReservationInstancePlatform,
    CapacityReservationPreference,
    CapacityReservationState,
    CapacityReservationTenancy,
    CurrencyCodeValues,
    DefaultTargetCapacityType,
    DeviceType,
    DiskType,
    EbsEncryptionSupport,
    EbsOptimizedSupport,
    EndDateType,
    ExcessCapacityTerminationPolicy,
    FleetActivityStatus,
    FleetExcessCapacityTerminationPolicy,
    FleetStateCode,
    FleetType,
    FlowLogsResourceType,
    HttpTokensState,
    HypervisorType,
    ImageState,
    ImageTypeValues,
    InstanceInterruptionBehavior,
    InstanceLifecycleType,
    InstanceMatchCriteria,
    InstanceMetadataEndpointState,
    InstanceMetadataOptionsState,
    InstanceStateName,
    InstanceType,
    InstanceTypeHypervisor,
    LogDestinationType,
    MarketType,
    MonitoringState,
    NetworkInterfaceStatus,
    NetworkInterfaceType,
    OfferingClassType,
    OfferingTypeValues,
    OnDemandAllocationStrategy,
    PlacementGroupStrategy,
    PlatformValues,
    ProductCodeValues,
    RIProductDescription,
    RecurringChargeFrequency,
    ResourceType,
    RouteOrigin,
    RouteState,
    Scope,
    ShutdownBehavior,
    SpotInstanceState,
    SpotInstanceType,
    Tenancy,
    TrafficType,
    UsageClassType,
    VirtualizationType,
    VolumeType,
}
