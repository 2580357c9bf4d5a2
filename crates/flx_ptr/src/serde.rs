use alloc::vec::Vec;

use serde_core::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{UniquePtr, make_unique, make_unique_slice_from};

// -----------------------------------------------------------------------------
// Serialize

/// Serialized as `Option<T>`: a null pointer becomes `None`.
impl<T: ?Sized + Serialize> Serialize for UniquePtr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

// -----------------------------------------------------------------------------
// Deserialize

impl<'de, T: Deserialize<'de>> Deserialize<'de> for UniquePtr<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => make_unique(value),
            None => UniquePtr::null(),
        })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for UniquePtr<[T]> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<Vec<T>>::deserialize(deserializer)? {
            Some(values) => make_unique_slice_from(values),
            None => UniquePtr::null(),
        })
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use crate::{UniquePtr, make_unique, make_unique_slice_from};
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn serialize_as_option() {
        let ptr = make_unique(5u32);
        assert_eq!(serde_json::to_string(&ptr).unwrap(), "5");

        let null = UniquePtr::<u32>::null();
        assert_eq!(serde_json::to_string(&null).unwrap(), "null");

        let block = make_unique_slice_from(vec![1, 2, 3]);
        assert_eq!(serde_json::to_string(&block).unwrap(), "[1,2,3]");
    }

    #[test]
    fn deserialize_allocates() {
        let ptr: UniquePtr<String> = serde_json::from_str("\"flx\"").unwrap();
        assert_eq!(*ptr, "flx");

        let null: UniquePtr<String> = serde_json::from_str("null").unwrap();
        assert!(null.is_null());

        let block: UniquePtr<[i8]> = serde_json::from_str("[-1,0,1]").unwrap();
        assert_eq!(block.as_slice(), &[-1, 0, 1]);
    }
}
