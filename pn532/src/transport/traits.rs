// pn532/src/transport/traits.rs

use crate::Result;

/// SPI capability used by the bus transaction driver. The link to the
/// PN532 is half-duplex and this crate only ever writes, so the trait has
/// no read side.
pub trait SpiBus {
    /// Assert chip-select.
    fn select(&mut self) -> Result<()>;

    /// Deassert chip-select.
    fn deselect(&mut self) -> Result<()>;

    /// Shift out `data` as one contiguous burst while selected.
    fn write(&mut self, data: &[u8]) -> Result<()>;
}

impl<B: SpiBus + ?Sized> SpiBus for &mut B {
    fn select(&mut self) -> Result<()> {
        (**self).select()
    }

    fn deselect(&mut self) -> Result<()> {
        (**self).deselect()
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }
}

impl<B: SpiBus + ?Sized> SpiBus for Box<B> {
    fn select(&mut self) -> Result<()> {
        (**self).select()
    }

    fn deselect(&mut self) -> Result<()> {
        (**self).deselect()
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }
}
