//! Transport payloads, the [`Transport`] record, and dispatch entry points.
//!
//! [`Transport`] is a closed variant record: it holds exactly one of
//! [`Bus`], [`Car`], or [`Bike`]. The variant itself is a native enum
//! ([`TransportKind`]), so multi-populated states are unrepresentable; the
//! empty state remains reachable only through [`Transport::default`] and is
//! reported by every dispatch entry point as
//! [`DispatchError::UnsetVariant`].

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, Result};
use crate::visitor::TransportVisitor;

/// A bus, identified by route number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    /// Route number.
    pub number: i64,
    /// Fuel efficiency in miles per gallon.
    pub mpg: i64,
}

/// A car, identified by license plate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// License plate string.
    pub license_plate: String,
    /// Fuel efficiency in miles per gallon.
    pub mpg: i64,
}

/// A bike, identified by frame barcode. Burns no fuel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bike {
    /// Frame barcode.
    pub barcode: String,
}

/// The closed set of transport variants, each carrying its payload.
///
/// Being a native enum, "more than one variant set" is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportKind {
    /// A bus with its payload.
    Bus(Bus),
    /// A car with its payload.
    Car(Car),
    /// A bike with its payload.
    Bike(Bike),
}

/// A record holding exactly one transport variant.
///
/// Built through [`from_bus`](Transport::from_bus),
/// [`from_car`](Transport::from_car), or [`from_bike`](Transport::from_bike),
/// each of which takes its payload by value; the record owns the payload
/// exclusively and is immutable afterwards.
///
/// [`Transport::default`] produces a record with *no* variant set. Such a
/// record fails every dispatch with [`DispatchError::UnsetVariant`] instead
/// of invoking any handler.
///
/// # Examples
///
/// ```
/// use transport_dispatch::{Bike, Transport, TransportKind};
///
/// let transport = Transport::from_bike(Bike { barcode: "ABC123".to_string() });
/// assert!(transport.is_set());
/// assert!(matches!(transport.kind(), Some(TransportKind::Bike(_))));
///
/// assert!(!Transport::default().is_set());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    kind: Option<TransportKind>,
}

impl Transport {
    /// Creates a record holding the given bus. Cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_dispatch::{Bus, Transport};
    ///
    /// let transport = Transport::from_bus(Bus { number: 12, mpg: 8 });
    /// assert!(transport.as_bus().is_some());
    /// ```
    pub fn from_bus(bus: Bus) -> Self {
        Self {
            kind: Some(TransportKind::Bus(bus)),
        }
    }

    /// Creates a record holding the given car. Cannot fail.
    pub fn from_car(car: Car) -> Self {
        Self {
            kind: Some(TransportKind::Car(car)),
        }
    }

    /// Creates a record holding the given bike. Cannot fail.
    pub fn from_bike(bike: Bike) -> Self {
        Self {
            kind: Some(TransportKind::Bike(bike)),
        }
    }

    /// Returns the variant held by this record, or `None` for the empty
    /// record produced by [`Transport::default`].
    pub fn kind(&self) -> Option<&TransportKind> {
        self.kind.as_ref()
    }

    /// Returns `true` if a variant is set. Every record built by the
    /// constructors satisfies this.
    pub fn is_set(&self) -> bool {
        self.kind.is_some()
    }

    /// Returns the bus payload if this record holds a bus.
    pub fn as_bus(&self) -> Option<&Bus> {
        match self.kind.as_ref() {
            Some(TransportKind::Bus(bus)) => Some(bus),
            _ => None,
        }
    }

    /// Returns the car payload if this record holds a car.
    pub fn as_car(&self) -> Option<&Car> {
        match self.kind.as_ref() {
            Some(TransportKind::Car(car)) => Some(car),
            _ => None,
        }
    }

    /// Returns the bike payload if this record holds a bike.
    pub fn as_bike(&self) -> Option<&Bike> {
        match self.kind.as_ref() {
            Some(TransportKind::Bike(bike)) => Some(bike),
            _ => None,
        }
    }

    /// Dispatches to the value-producing handler matching the set variant.
    ///
    /// This is the canonical matching primitive: [`accept`](Transport::accept)
    /// and [`accept_visitor`](Transport::accept_visitor) are thin layers over
    /// it, so selection order, pass-through, and failure semantics are
    /// identical across all three calling conventions.
    ///
    /// Exactly one handler is invoked, and its `Result` is returned
    /// unchanged. Every handler must produce a `T`, so the compiler catches
    /// the "forgot to set the output" bug on each branch. On an empty record
    /// no handler runs and [`DispatchError::UnsetVariant`] is returned.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnsetVariant`] if no variant is set; otherwise
    /// whatever the invoked handler returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_dispatch::{Car, Transport};
    ///
    /// let transport = Transport::from_car(Car {
    ///     license_plate: "CO-AYE-YOO".to_string(),
    ///     mpg: 30,
    /// });
    ///
    /// let id = transport.accept_map(
    ///     |bus| Ok(bus.number.to_string()),
    ///     |car| Ok(car.license_plate.clone()),
    ///     |bike| Ok(bike.barcode.clone()),
    /// )?;
    /// assert_eq!(id, "CO-AYE-YOO");
    /// # Ok::<(), transport_dispatch::DispatchError>(())
    /// ```
    pub fn accept_map<T, FB, FC, FK>(&self, on_bus: FB, on_car: FC, on_bike: FK) -> Result<T>
    where
        FB: FnOnce(&Bus) -> Result<T>,
        FC: FnOnce(&Car) -> Result<T>,
        FK: FnOnce(&Bike) -> Result<T>,
    {
        match self.kind.as_ref() {
            Some(TransportKind::Bus(bus)) => {
                tracing::trace!(number = bus.number, "dispatching bus variant");
                on_bus(bus)
            }
            Some(TransportKind::Car(car)) => {
                tracing::trace!(license_plate = %car.license_plate, "dispatching car variant");
                on_car(car)
            }
            Some(TransportKind::Bike(bike)) => {
                tracing::trace!(barcode = %bike.barcode, "dispatching bike variant");
                on_bike(bike)
            }
            None => {
                tracing::debug!("dispatch attempted on unset transport record");
                Err(DispatchError::UnsetVariant)
            }
        }
    }

    /// Dispatches to the side-effecting handler matching the set variant.
    ///
    /// Handling each variant is enforced at compile time, but unlike
    /// [`accept_map`](Transport::accept_map) there is no check that each
    /// branch produced an output; use this when the handlers exist purely
    /// for their effects.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnsetVariant`] if no variant is set; otherwise
    /// whatever the invoked handler returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    ///
    /// use transport_dispatch::{Bus, Transport};
    ///
    /// let transport = Transport::from_bus(Bus { number: 123, mpg: 50 });
    ///
    /// let mpg = Cell::new(0);
    /// transport.accept(
    ///     |bus| {
    ///         mpg.set(bus.mpg);
    ///         Ok(())
    ///     },
    ///     |car| {
    ///         mpg.set(car.mpg);
    ///         Ok(())
    ///     },
    ///     |_bike| {
    ///         mpg.set(i64::MAX);
    ///         Ok(())
    ///     },
    /// )?;
    /// assert_eq!(mpg.get(), 50);
    /// # Ok::<(), transport_dispatch::DispatchError>(())
    /// ```
    pub fn accept<FB, FC, FK>(&self, on_bus: FB, on_car: FC, on_bike: FK) -> Result<()>
    where
        FB: FnOnce(&Bus) -> Result<()>,
        FC: FnOnce(&Car) -> Result<()>,
        FK: FnOnce(&Bike) -> Result<()>,
    {
        self.accept_map(on_bus, on_car, on_bike)
    }

    /// Dispatches through a [`TransportVisitor`] implementation.
    ///
    /// A named visitor is defined once and passed to many call sites,
    /// trading the per-call-site boilerplate of
    /// [`accept_map`](Transport::accept_map)'s three closures for a one-time
    /// type declaration. For one-off call sites,
    /// [`FnVisitor`](crate::FnVisitor) builds a visitor from three closures
    /// instead.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnsetVariant`] if no variant is set; otherwise
    /// whatever the invoked visitor method returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use transport_dispatch::{Bike, Bus, Car, Result, Transport, TransportVisitor};
    ///
    /// struct MpgVisitor;
    ///
    /// impl TransportVisitor for MpgVisitor {
    ///     type Output = i64;
    ///
    ///     fn visit_bus(&self, bus: &Bus) -> Result<i64> {
    ///         Ok(bus.mpg)
    ///     }
    ///
    ///     fn visit_car(&self, car: &Car) -> Result<i64> {
    ///         Ok(car.mpg)
    ///     }
    ///
    ///     fn visit_bike(&self, _bike: &Bike) -> Result<i64> {
    ///         Ok(i64::MAX)
    ///     }
    /// }
    ///
    /// let transport = Transport::from_bus(Bus { number: 123, mpg: 50 });
    /// assert_eq!(transport.accept_visitor(&MpgVisitor)?, 50);
    /// # Ok::<(), transport_dispatch::DispatchError>(())
    /// ```
    pub fn accept_visitor<V>(&self, visitor: &V) -> Result<V::Output>
    where
        V: TransportVisitor + ?Sized,
    {
        self.accept_map(
            |bus| visitor.visit_bus(bus),
            |car| visitor.visit_car(car),
            |bike| visitor.visit_bike(bike),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bus() -> Bus {
        Bus { number: 123, mpg: 50 }
    }

    #[test]
    fn constructors_set_exactly_their_variant() {
        let bus = Transport::from_bus(sample_bus());
        assert!(bus.is_set());
        assert!(bus.as_bus().is_some());
        assert!(bus.as_car().is_none());
        assert!(bus.as_bike().is_none());

        let car = Transport::from_car(Car {
            license_plate: "XYZ".to_string(),
            mpg: 30,
        });
        assert!(car.as_car().is_some());
        assert!(car.as_bus().is_none());

        let bike = Transport::from_bike(Bike {
            barcode: "B1".to_string(),
        });
        assert!(bike.as_bike().is_some());
        assert!(bike.as_car().is_none());
    }

    #[test]
    fn default_record_is_unset() {
        let empty = Transport::default();
        assert!(!empty.is_set());
        assert!(empty.kind().is_none());
        assert!(empty.as_bus().is_none());
        assert!(empty.as_car().is_none());
        assert!(empty.as_bike().is_none());
    }

    #[test]
    fn accept_map_returns_handler_value_verbatim() {
        let transport = Transport::from_bus(sample_bus());
        let mpg = transport
            .accept_map(|b| Ok(b.mpg), |c| Ok(c.mpg), |_| Ok(i64::MAX))
            .unwrap();
        assert_eq!(mpg, 50);
    }

    #[test]
    fn accept_map_passes_handler_failure_through() {
        let transport = Transport::from_car(Car {
            license_plate: "P".to_string(),
            mpg: 1,
        });
        let err = transport
            .accept_map::<i64, _, _, _>(
                |_| Ok(0),
                |car| Err(DispatchError::handler(format!("bad plate: {}", car.license_plate))),
                |_| Ok(0),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "bad plate: P");
    }

    #[test]
    fn unset_record_fails_without_invoking_handlers() {
        let invoked = std::cell::Cell::new(false);
        let err = Transport::default()
            .accept(
                |_| {
                    invoked.set(true);
                    Ok(())
                },
                |_| {
                    invoked.set(true);
                    Ok(())
                },
                |_| {
                    invoked.set(true);
                    Ok(())
                },
            )
            .unwrap_err();
        assert!(err.is_unset());
        assert!(!invoked.get());
    }

    #[test]
    fn transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Transport>();
        assert_send_sync::<TransportKind>();
    }

    #[test]
    fn payloads_serialize_with_camel_case_fields() {
        let json = serde_json::to_value(Car {
            license_plate: "CO-AYE-YOO".to_string(),
            mpg: 30,
        })
        .unwrap();
        assert_eq!(json["licensePlate"], "CO-AYE-YOO");
        assert_eq!(json["mpg"], 30);
    }
}
