//! The [`TransportVisitor`] capability trait and the [`FnVisitor`] adapter.
//!
//! A visitor bundles one handling operation per transport variant behind a
//! single object, all producing the same [`Output`](TransportVisitor::Output)
//! type. Define a named visitor once and pass it to
//! [`Transport::accept_visitor`](crate::Transport::accept_visitor) at many
//! call sites, or build a one-off visitor from closures with [`FnVisitor`].

use std::fmt;

use crate::error::Result;
use crate::transport::{Bike, Bus, Car};

/// One handling operation per transport variant, uniform in output type.
///
/// Methods take `&self`: dispatching through the same visitor twice must be
/// safe. Visitors own their captured state exclusively; the dispatcher does
/// no synchronization, so a visitor closing over shared mutable state is
/// responsible for its own safety.
///
/// # Examples
///
/// ```
/// use transport_dispatch::{Bike, Bus, Car, Result, Transport, TransportVisitor};
///
/// /// Projects a uniform identifier out of any variant.
/// struct IdVisitor;
///
/// impl TransportVisitor for IdVisitor {
///     type Output = String;
///
///     fn visit_bus(&self, bus: &Bus) -> Result<String> {
///         Ok(bus.number.to_string())
///     }
///
///     fn visit_car(&self, car: &Car) -> Result<String> {
///         Ok(car.license_plate.clone())
///     }
///
///     fn visit_bike(&self, bike: &Bike) -> Result<String> {
///         Ok(bike.barcode.clone())
///     }
/// }
///
/// let transport = Transport::from_bike(Bike { barcode: "ABC123".to_string() });
/// assert_eq!(transport.accept_visitor(&IdVisitor)?, "ABC123");
/// # Ok::<(), transport_dispatch::DispatchError>(())
/// ```
pub trait TransportVisitor {
    /// The type every visit method produces.
    type Output;

    /// Handles the bus variant.
    fn visit_bus(&self, bus: &Bus) -> Result<Self::Output>;

    /// Handles the car variant.
    fn visit_car(&self, car: &Car) -> Result<Self::Output>;

    /// Handles the bike variant.
    fn visit_bike(&self, bike: &Bike) -> Result<Self::Output>;
}

/// A [`TransportVisitor`] built from three closures.
///
/// Bridges the loose-closure convention of
/// [`Transport::accept_map`](crate::Transport::accept_map) with the named
/// visitor convention: the adapter owns the three closures and forwards each
/// visit method to the matching one, so one-off call sites get a visitor
/// without declaring a dedicated type. Dispatching through
/// `FnVisitor::new(f, g, h)` behaves identically to calling `accept_map`
/// with `(f, g, h)` directly.
///
/// One adapter is hand-written per visitor trait; generating these
/// mechanically for arbitrary traits is out of scope.
///
/// # Examples
///
/// ```
/// use transport_dispatch::{Bus, FnVisitor, Transport};
///
/// let id_visitor = FnVisitor::new(
///     |bus: &Bus| Ok(bus.number.to_string()),
///     |car: &transport_dispatch::Car| Ok(car.license_plate.clone()),
///     |bike: &transport_dispatch::Bike| Ok(bike.barcode.clone()),
/// );
///
/// let transport = Transport::from_bus(Bus { number: 123, mpg: 50 });
/// assert_eq!(transport.accept_visitor(&id_visitor)?, "123");
/// # Ok::<(), transport_dispatch::DispatchError>(())
/// ```
#[derive(Clone)]
pub struct FnVisitor<FB, FC, FK> {
    on_bus: FB,
    on_car: FC,
    on_bike: FK,
}

impl<FB, FC, FK> fmt::Debug for FnVisitor<FB, FC, FK> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnVisitor").finish_non_exhaustive()
    }
}

impl<FB, FC, FK> FnVisitor<FB, FC, FK> {
    /// Builds a visitor from one closure per variant.
    pub fn new(on_bus: FB, on_car: FC, on_bike: FK) -> Self {
        Self {
            on_bus,
            on_car,
            on_bike,
        }
    }
}

impl<T, FB, FC, FK> TransportVisitor for FnVisitor<FB, FC, FK>
where
    FB: Fn(&Bus) -> Result<T>,
    FC: Fn(&Car) -> Result<T>,
    FK: Fn(&Bike) -> Result<T>,
{
    type Output = T;

    fn visit_bus(&self, bus: &Bus) -> Result<T> {
        (self.on_bus)(bus)
    }

    fn visit_car(&self, car: &Car) -> Result<T> {
        (self.on_car)(car)
    }

    fn visit_bike(&self, bike: &Bike) -> Result<T> {
        (self.on_bike)(bike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use crate::transport::Transport;

    fn mpg_visitor() -> impl TransportVisitor<Output = i64> {
        FnVisitor::new(
            |bus: &Bus| Ok(bus.mpg),
            |car: &Car| Ok(car.mpg),
            |_bike: &Bike| Ok(i64::MAX),
        )
    }

    #[test]
    fn adapter_forwards_to_matching_closure() {
        let visitor = mpg_visitor();
        assert_eq!(
            visitor.visit_bus(&Bus { number: 1, mpg: 7 }).unwrap(),
            7
        );
        assert_eq!(
            visitor
                .visit_car(&Car {
                    license_plate: "P".to_string(),
                    mpg: 9,
                })
                .unwrap(),
            9
        );
        assert_eq!(
            visitor
                .visit_bike(&Bike {
                    barcode: "B".to_string(),
                })
                .unwrap(),
            i64::MAX
        );
    }

    #[test]
    fn adapter_is_repeatable() {
        let visitor = mpg_visitor();
        let transport = Transport::from_bus(Bus { number: 1, mpg: 42 });
        assert_eq!(transport.accept_visitor(&visitor).unwrap(), 42);
        assert_eq!(transport.accept_visitor(&visitor).unwrap(), 42);
    }

    #[test]
    fn adapter_passes_closure_failure_through() {
        let visitor = FnVisitor::new(
            |_: &Bus| Err::<i64, _>(DispatchError::handler("bus depot closed")),
            |car: &Car| Ok(car.mpg),
            |_: &Bike| Ok(i64::MAX),
        );
        let err = Transport::from_bus(Bus { number: 1, mpg: 1 })
            .accept_visitor(&visitor)
            .unwrap_err();
        assert_eq!(err.to_string(), "bus depot closed");
    }

    #[test]
    fn unset_record_fails_before_reaching_the_visitor() {
        let visitor = mpg_visitor();
        let err = Transport::default().accept_visitor(&visitor).unwrap_err();
        assert!(err.is_unset());
    }
}
