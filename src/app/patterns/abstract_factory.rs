use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

pub trait Computer: fmt::Display {}
pub trait Storage: fmt::Display {}

macro_rules! product {
    ($name:ident: $kind:ident) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $kind for $name {}

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

product!(DesktopComputer: Computer);
product!(HardDisk: Storage);
product!(MobilePhone: Computer);
product!(NandFlashMemory: Storage);

/// 一組成對的產品：同一個工廠做出的電腦與儲存裝置必定相配
pub trait SystemFactory {
    type Computer: Computer;
    type Storage: Storage;

    fn make_computer() -> Self::Computer;
    fn make_storage() -> Self::Storage;
}

pub struct DesktopComputerSystemFactory;

impl SystemFactory for DesktopComputerSystemFactory {
    type Computer = DesktopComputer;
    type Storage = HardDisk;

    fn make_computer() -> DesktopComputer {
        DesktopComputer
    }

    fn make_storage() -> HardDisk {
        HardDisk
    }
}

pub struct MobilePhoneSystemFactory;

impl SystemFactory for MobilePhoneSystemFactory {
    type Computer = MobilePhone;
    type Storage = NandFlashMemory;

    fn make_computer() -> MobilePhone {
        MobilePhone
    }

    fn make_storage() -> NandFlashMemory {
        NandFlashMemory
    }
}

fn write_system<F: SystemFactory>(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{} {}", F::make_computer(), F::make_storage())?;
    Ok(())
}

pub fn abstract_factory_demo(out: &mut dyn Write) -> Result<()> {
    write_system::<DesktopComputerSystemFactory>(out)?;
    write_system::<MobilePhoneSystemFactory>(out)
}
