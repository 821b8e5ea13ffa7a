use uuid::Uuid;

use crate::claims::StudentPrincipal;

/// A student may only touch records owned by their own intern id.
pub fn validate_student_access(principal: &StudentPrincipal, owner_intern_id: &Uuid) -> bool {
    principal.intern_id == *owner_intern_id
}
