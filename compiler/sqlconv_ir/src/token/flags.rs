use bitflags::bitflags;

bitflags! {
    /// Per-token state bits.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Soft-deleted: stays linked, renders nothing.
        const REMOVED = 1 << 0;
        /// Spliced in after scanning.
        const INSERTED = 1 << 1;
        /// Closed at end of input without its delimiter.
        const MALFORMED = 1 << 2;
    }
}
