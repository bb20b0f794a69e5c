//! Conditional wrapper fragments and the verbatim port list.

use cosim_common::AxiPort;
use cosim_conformance::{generate, generic_value, StubBuilder};
use pretty_assertions::assert_eq;

#[test]
fn port_list_copied_verbatim() {
    let builder = StubBuilder::default()
        .clock(0)
        .axi(AxiPort::MGp0)
        .interrupt();
    let out = generate(&builder.build(), "top");
    let expected = format!("        );\n{}\nend entity", builder.port_block());
    assert!(out.wrapper().contains(&expected));
    assert_eq!(out.descriptor.port_block(), builder.port_block());
}

#[test]
fn no_clocks_means_no_clock_text() {
    let out = generate(&StubBuilder::default().axi(AxiPort::MGp0).build(), "top");
    let wrapper = out.wrapper();
    assert!(!wrapper.contains("fclk_clk"));
    assert!(!wrapper.contains("FCLK_RESET"));
    for i in 0..4 {
        assert_eq!(
            generic_value(wrapper, &format!("FCLK_CLK{i}_PERIOD_IN_NS_G")),
            Some("-1")
        );
    }
}

#[test]
fn clocks_connected_and_reset_in_ascending_order() {
    let stub = StubBuilder::default().clock(3).clock(1).build();
    let out = generate(&stub, "top");
    let wrapper = out.wrapper();

    let c1 = wrapper.find("            fclk_clk1         => FCLK_CLK1,\n").unwrap();
    let c3 = wrapper.find("            fclk_clk3         => FCLK_CLK3,\n").unwrap();
    assert!(c1 < c3);
    let r1 = wrapper.find("    FCLK_RESET1_N <= not rst_s;\n").unwrap();
    let r3 = wrapper.find("    FCLK_RESET3_N <= not rst_s;\n").unwrap();
    assert!(c3 < r1 && r1 < r3);
    assert!(!wrapper.contains("fclk_clk0"));

    assert_eq!(generic_value(wrapper, "FCLK_CLK1_PERIOD_IN_NS_G"), Some("10000"));
    assert_eq!(generic_value(wrapper, "FCLK_CLK2_PERIOD_IN_NS_G"), Some("-1"));
}

#[test]
fn no_interrupt_leaves_no_blank_fragment() {
    let out = generate(&StubBuilder::default().clock(0).build(), "top");
    let wrapper = out.wrapper();
    assert!(!wrapper.contains("irq_f2p"));
    assert!(wrapper.contains(
        "            fclk_clk0         => FCLK_CLK0,\n            --__\n            --\n            rst_o             => rst_s);\n"
    ));
}

#[test]
fn interrupt_is_last_connection() {
    let stub = StubBuilder::default()
        .interrupt()
        .axi(AxiPort::SHp3)
        .clock(2)
        .build();
    let out = generate(&stub, "top");
    let wrapper = out.wrapper();
    let clk = wrapper.find("--__CONNECT_FCLK_CLK2__").unwrap();
    let axi = wrapper.find("--__CONNECT_S_AXI_HP3__").unwrap();
    let irq = wrapper
        .find("            irq_f2p           => std_logic_vector(resize(unsigned(IRQ_F2P), 16)),\n")
        .unwrap();
    assert!(clk < axi && axi < irq);
}

#[test]
fn axi_fragment_binds_all_signals() {
    let out = generate(&StubBuilder::default().axi(AxiPort::SGp0).build(), "top");
    let wrapper = out.wrapper();
    let start = wrapper.find("            --__CONNECT_S_AXI_GP0__\n").unwrap();
    let fragment: Vec<&str> = wrapper[start..].lines().skip(1).take(40).collect();
    assert_eq!(fragment[0], "            s_axi_gp0_aclk    => S_AXI_GP0_ACLK,");
    assert_eq!(fragment[1], "            s_axi_gp0_aresetn => s_axi_gp0_aresetn_s,");
    assert_eq!(fragment[4], "            s_axi_gp0_awaddr  => S_AXI_GP0_AWADDR,");
    assert_eq!(fragment[39], "            s_axi_gp0_rlast   => S_AXI_GP0_RLAST,");
    assert!(fragment.iter().all(|l| l.starts_with("            s_axi_gp0_")));
    assert!(wrapper.contains("    s_axi_gp0_aresetn_s <= not rst_s;\n"));
}

#[test]
fn unknown_interface_names_warn_and_are_ignored() {
    let stub = StubBuilder::default().axi(AxiPort::MGp0).build().replace(
        "    PS_PORB : inout STD_LOGIC\n",
        "    PS_PORB : inout STD_LOGIC;\n    M_AXI_HP0_ACLK : in STD_LOGIC\n",
    );
    let out = generate(&stub, "top");
    assert_eq!(out.warnings.len(), 1);
    assert_eq!(out.warnings[0].code.to_string(), "W201");
    assert!(!out.wrapper().contains("m_axi_hp0"));
    assert_eq!(out.descriptor.axi_ports().len(), 1);
}

#[test]
fn wrapper_shape() {
    let out = generate(&StubBuilder::default().clock(0).build(), "top");
    let wrapper = out.wrapper();
    assert!(wrapper.contains("\nentity design_1_processing_system7_0_0 is\n    generic(\n"));
    assert!(wrapper.contains("\nend entity design_1_processing_system7_0_0;\n"));
    assert!(wrapper.contains("\narchitecture struct of design_1_processing_system7_0_0 is\n"));
    assert!(wrapper.contains("    zynq7_ps_wrapper_inst : entity work.zynq7_ps_wrapper\n"));
    assert!(wrapper.ends_with("end architecture struct;\n"));
    assert!(!wrapper.contains("{{"));
}
