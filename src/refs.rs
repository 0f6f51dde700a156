use pdf_writer::Ref;

/// Hands out sequential PDF object ids, starting from 1. Every id is
/// threaded from its `alloc` call to the one place that writes the object.
pub struct ObjectReferences {
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences { next_id: 1 }
    }

    pub fn alloc(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut refs = ObjectReferences::new();
        assert_eq!(refs.alloc(), Ref::new(1));
        assert_eq!(refs.alloc(), Ref::new(2));
        assert_eq!(refs.alloc(), Ref::new(3));
    }
}
