unit! {
    system: uom::si;
    quantity: uom::si::dynamic_viscosity;

    @pound_per_foot_hour: 4.535_924_E-1 / (3.048_E-1 * 3.6_E3);
        "lb/(ft · h)", "pound per foot hour", "pounds per foot hour";
}
