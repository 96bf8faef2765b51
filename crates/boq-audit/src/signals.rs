use boq_model::Position;

/// Inputs the classifier reads from a position-shaped record.
///
/// Only `code` is required; the upstream signals default to absent.
pub trait AuditSignals {
    fn code(&self) -> Option<&str>;

    fn validation_status(&self) -> Option<&str> {
        None
    }

    fn enrichment_status(&self) -> Option<&str> {
        None
    }

    fn unit_price(&self) -> Option<f64> {
        None
    }
}

impl<T: AuditSignals + ?Sized> AuditSignals for &T {
    fn code(&self) -> Option<&str> {
        (**self).code()
    }

    fn validation_status(&self) -> Option<&str> {
        (**self).validation_status()
    }

    fn enrichment_status(&self) -> Option<&str> {
        (**self).enrichment_status()
    }

    fn unit_price(&self) -> Option<f64> {
        (**self).unit_price()
    }
}

// Extracted positions carry no pricing, so they never classify GREEN.
impl AuditSignals for Position {
    fn code(&self) -> Option<&str> {
        Some(Position::code(self))
    }
}
