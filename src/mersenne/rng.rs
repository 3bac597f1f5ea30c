use rand::{Error as RandError, RngCore};

use super::{mt19937, mt19937_64};

impl RngCore for mt19937::Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    /// Low word is drawn first
    fn next_u64(&mut self) -> u64 {
        let lo = self.next_raw() as u64;
        let hi = self.next_raw() as u64;

        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let block = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl RngCore for mt19937_64::Mt19937 {
    /// Truncates one 64-bit word to its low half
    fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let block = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&block[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), RandError> {
        self.fill_bytes(dest);
        Ok(())
    }
}
